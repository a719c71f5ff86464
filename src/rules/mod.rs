//! Game rules.
//!
//! `GameLogic` validates moves, resolves rounds and produces the next
//! `GameState`. It is the only code that writes to a `GameState`.

pub mod engine;
pub mod error;

pub use engine::{GameLogic, Submission};
pub use error::MoveError;
