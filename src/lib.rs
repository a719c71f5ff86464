//! # rps-plus
//!
//! Referee engine for a three-round game of rock, paper, scissors, bomb
//! between a human and a scripted opponent.
//!
//! ## Rules
//!
//! 1. Best of 3 rounds. Valid moves: rock, paper, scissors, bomb
//! 2. Bomb beats every other move; bomb vs bomb is a draw
//! 3. Each side may bomb once per game; the opponent never bombs in round 1
//! 4. An invalid move (or a second bomb) wastes the round
//! 5. The game ends after the last round; the higher score wins
//!
//! ## Design
//!
//! - **Functional state**: `GameLogic` takes a `GameState` and returns the
//!   next one. `im` vectors keep the history clone O(1).
//! - **Injected randomness**: the opponent draws from a caller-owned,
//!   seedable `GameRng`, so whole games replay exactly.
//! - **One state per session**: `SessionStore` keys isolated `Game`s by id;
//!   there is no global game state.
//!
//! ## Modules
//!
//! - `core`: moves, outcomes, state, RNG, configuration
//! - `rules`: validation, resolution, explanations, state transitions
//! - `opponent`: opponent move policies
//! - `session`: owned games and the per-session store
//! - `referee`: player-facing messages

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;
pub mod referee;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, GameSnapshot, GameState, Move, RoundOutcome, RoundRecord,
    StateError, Status, Winner, MAX_ROUNDS,
};

pub use crate::rules::{GameLogic, MoveError, Submission};

pub use crate::opponent::{BombingOpponent, OpponentPolicy, ScriptedOpponent};

pub use crate::session::{Game, SessionStore, SnapshotError};

pub use crate::referee::{FlavorError, FlavorText, NoFlavor, Referee};
