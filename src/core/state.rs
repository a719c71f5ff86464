//! Game state and its read-only projections.
//!
//! ## GameState
//!
//! The single mutable record of one game: round counter, scores, bomb
//! latches, round history and the termination flag. Fields are readable
//! by anyone but writable only by `rules::GameLogic`, which owns the two
//! transitions (resolved round and wasted round).
//!
//! ## Projections
//!
//! - `Status`: what a player needs to see between rounds
//! - `GameSnapshot`: the wire/storage shape, history summarized as a count

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::moves::{RoundOutcome, RoundRecord};

/// A `GameState` no sequence of rounds could have produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("round {round} outside 1..={last}")]
    RoundOutOfRange { round: u32, last: u32 },

    #[error("game_over is {game_over} at round {round}")]
    TerminationMismatch { round: u32, game_over: bool },

    #[error("history has {records} rounds but only {elapsed} have elapsed")]
    HistoryTooLong { records: usize, elapsed: u32 },

    #[error("history record for round {0} is out of order")]
    HistoryOrder(u32),

    #[error("history record for round {0} has no resolved outcome")]
    UnresolvedRecord(u32),

    #[error("{side} bomb flag disagrees with history")]
    BombLatch { side: &'static str },

    #[error("score {user}-{bot} disagrees with history")]
    ScoreMismatch { user: u32, bot: u32 },
}

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::User => f.write_str("USER WINS"),
            Winner::Bot => f.write_str("BOT WINS"),
            Winner::Draw => f.write_str("DRAW"),
        }
    }
}

/// State of one game in progress.
///
/// Uses an `im` vector for history so a functional update
/// (`state -> state'`) clones in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current round, starting at 1.
    pub(crate) round_number: u32,
    pub(crate) user_score: u32,
    pub(crate) bot_score: u32,
    pub(crate) user_bomb_used: bool,
    pub(crate) bot_bomb_used: bool,
    /// Resolved rounds in play order. Wasted rounds are not recorded.
    pub(crate) rounds_history: Vector<RoundRecord>,
    pub(crate) game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state: round 1, no score, both bombs available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round_number: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            rounds_history: Vector::new(),
            game_over: false,
        }
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    #[must_use]
    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    #[must_use]
    pub fn user_bomb_used(&self) -> bool {
        self.user_bomb_used
    }

    #[must_use]
    pub fn bot_bomb_used(&self) -> bool {
        self.bot_bomb_used
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Resolved rounds in play order.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.rounds_history
    }

    /// Number of resolved (non-wasted) rounds.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds_history.len()
    }

    /// The most recently resolved round.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.rounds_history.last()
    }

    /// Final result, available once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        if !self.game_over {
            return None;
        }
        Some(match self.user_score.cmp(&self.bot_score) {
            std::cmp::Ordering::Greater => Winner::User,
            std::cmp::Ordering::Less => Winner::Bot,
            std::cmp::Ordering::Equal => Winner::Draw,
        })
    }

    /// Read-only status projection.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            round: self.round_number,
            user_score: self.user_score,
            bot_score: self.bot_score,
            user_bomb_available: !self.user_bomb_used,
            bot_bomb_available: !self.bot_bomb_used,
            game_over: self.game_over,
        }
    }

    /// Wire/storage projection with history summarized as a count.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round_number: self.round_number,
            user_score: self.user_score,
            bot_score: self.bot_score,
            user_bomb_used: self.user_bomb_used,
            bot_bomb_used: self.bot_bomb_used,
            rounds_played: self.rounds_history.len(),
            game_over: self.game_over,
        }
    }

    /// Check that this state is reachable in a game of `max_rounds`.
    ///
    /// Counter, termination flag, bomb latches and scores must all agree
    /// with the recorded history.
    pub fn check(&self, max_rounds: u32) -> Result<(), StateError> {
        let round = self.round_number;
        let last = max_rounds.saturating_add(1);
        if !(1..=last).contains(&round) {
            return Err(StateError::RoundOutOfRange { round, last });
        }
        if self.game_over != (round > max_rounds) {
            return Err(StateError::TerminationMismatch {
                round,
                game_over: self.game_over,
            });
        }

        let elapsed = round - 1;
        if self.rounds_history.len() > elapsed as usize {
            return Err(StateError::HistoryTooLong {
                records: self.rounds_history.len(),
                elapsed,
            });
        }

        let mut previous = 0;
        let (mut user_wins, mut bot_wins) = (0u32, 0u32);
        let (mut user_bombed, mut bot_bombed) = (false, false);
        for record in &self.rounds_history {
            if record.round_number <= previous || record.round_number >= round {
                return Err(StateError::HistoryOrder(record.round_number));
            }
            previous = record.round_number;

            let user_move = match record.user_move {
                Some(mv) if record.outcome != RoundOutcome::Invalid => mv,
                _ => return Err(StateError::UnresolvedRecord(record.round_number)),
            };
            user_bombed |= user_move.is_bomb();
            bot_bombed |= record.bot_move.is_bomb();
            match record.outcome {
                RoundOutcome::UserWin => user_wins += 1,
                RoundOutcome::BotWin => bot_wins += 1,
                RoundOutcome::Draw | RoundOutcome::Invalid => {}
            }
        }

        if self.user_bomb_used != user_bombed {
            return Err(StateError::BombLatch { side: "user" });
        }
        if self.bot_bomb_used != bot_bombed {
            return Err(StateError::BombLatch { side: "bot" });
        }
        if (self.user_score, self.bot_score) != (user_wins, bot_wins) {
            return Err(StateError::ScoreMismatch {
                user: self.user_score,
                bot: self.bot_score,
            });
        }
        Ok(())
    }
}

/// Status between rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub round: u32,
    pub user_score: u32,
    pub bot_score: u32,
    pub user_bomb_available: bool,
    pub bot_bomb_available: bool,
    pub game_over: bool,
}

impl Status {
    /// Score as `"<user>-<bot>"`.
    #[must_use]
    pub fn score(&self) -> String {
        format!("{}-{}", self.user_score, self.bot_score)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {} | Score {}", self.round, self.score())?;
        if self.game_over {
            write!(f, " | game over")
        } else if self.user_bomb_available {
            write!(f, " | bomb available")
        } else {
            Ok(())
        }
    }
}

/// Serialized shape of a game for external consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round_number: u32,
    pub user_score: u32,
    pub bot_score: u32,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub rounds_played: usize,
    pub game_over: bool,
}
