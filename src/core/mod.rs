//! Core types: moves, outcomes, state, RNG, configuration.
//!
//! Nothing in here knows the rules of the game. `rules` interprets these
//! types; `session` owns them.

pub mod moves;
pub mod rng;
pub mod config;
pub mod state;

pub use moves::{Move, RoundOutcome, RoundRecord, UnknownMove};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, GameConfig, BOT_BOMB_EARLIEST_ROUND, BOT_BOMB_PROBABILITY, MAX_ROUNDS};
pub use state::{GameSnapshot, GameState, StateError, Status, Winner};
