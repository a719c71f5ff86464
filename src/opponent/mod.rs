//! Opponent move selection.
//!
//! This is the only place randomness enters a game. The RNG is always
//! passed in by the caller, so a seeded `GameRng` makes every game
//! reproducible.

pub mod policy;

pub use policy::{BombingOpponent, OpponentPolicy, ScriptedOpponent};
