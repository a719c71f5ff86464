//! Move and outcome vocabulary.
//!
//! Moves are a closed set of four symbols. Input tokens are matched
//! case-insensitively after trimming; the canonical form is lower-case.
//!
//! ```
//! use rps_plus::core::Move;
//!
//! assert_eq!(" ROCK ".parse::<Move>(), Ok(Move::Rock));
//! assert_eq!(Move::Bomb.as_str(), "bomb");
//! assert!("lizard".parse::<Move>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// One-time special move. Beats everything except another bomb.
    Bomb,
}

impl Move {
    /// All four moves, in canonical order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three ordinary moves.
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical lower-case token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Whether this is the special move.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// The ordinary move this one defeats. `None` for bomb.
    #[must_use]
    pub const fn beats(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token does not name a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("not a move: expected rock, paper, scissors or bomb")]
pub struct UnknownMove;

impl FromStr for Move {
    type Err = UnknownMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| token.eq_ignore_ascii_case(m.as_str()))
            .ok_or(UnknownMove)
    }
}

/// Outcome of one round from the user's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    UserWin,
    BotWin,
    Draw,
    /// A wasted round. Never produced by the resolver.
    Invalid,
}

impl RoundOutcome {
    /// `UserWin` or `BotWin`.
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        matches!(self, RoundOutcome::UserWin | RoundOutcome::BotWin)
    }

    /// The same round seen from the other side.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            RoundOutcome::UserWin => RoundOutcome::BotWin,
            RoundOutcome::BotWin => RoundOutcome::UserWin,
            other => other,
        }
    }

    /// Wire token (`user_win`, `bot_win`, `draw`, `invalid`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::UserWin => "user_win",
            RoundOutcome::BotWin => "bot_win",
            RoundOutcome::Draw => "draw",
            RoundOutcome::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of one resolved round.
///
/// `user_move` is `None` only for records describing a wasted round;
/// those are reported to the caller but never stored in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round index.
    pub round_number: u32,
    pub user_move: Option<Move>,
    pub bot_move: Move,
    pub outcome: RoundOutcome,
    /// Human-readable explanation of the outcome.
    pub explanation: String,
}

impl RoundRecord {
    /// Create a record for a resolved round.
    #[must_use]
    pub fn new(
        round_number: u32,
        user_move: Move,
        bot_move: Move,
        outcome: RoundOutcome,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            round_number,
            user_move: Some(user_move),
            bot_move,
            outcome,
            explanation: explanation.into(),
        }
    }
}
