//! Reasons a submitted move is not played.

use thiserror::Error;

/// A rejected move submission.
///
/// `InvalidMoveToken` and `BombExhausted` waste the round;
/// `GameAlreadyOver` leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid move. Choose: rock, paper, scissors, or bomb")]
    InvalidMoveToken { input: String },

    #[error("Bomb already used!")]
    BombExhausted,

    #[error("Game is over! Start a new game to play again.")]
    GameAlreadyOver,
}

impl MoveError {
    /// Whether this rejection consumes the round.
    #[must_use]
    pub fn is_wasting(&self) -> bool {
        !matches!(self, MoveError::GameAlreadyOver)
    }
}
