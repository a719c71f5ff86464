//! Game configuration.
//!
//! `GameConfig` carries the few tunables of a game: how many rounds it
//! lasts and how the scripted opponent uses its bomb. Defaults match the
//! standard best-of-three game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rounds in a standard game.
pub const MAX_ROUNDS: u32 = 3;

/// Chance the opponent spends its bomb on an eligible round.
pub const BOT_BOMB_PROBABILITY: f64 = 0.3;

/// First round on which the opponent may bomb.
pub const BOT_BOMB_EARLIEST_ROUND: u32 = 2;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    NoRounds,

    #[error("bomb probability must be within [0, 1], got {0}")]
    BombProbability(f64),

    #[error("the opponent may not bomb before round 2, got round {0}")]
    BombRound(u32),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds played before the game ends.
    pub max_rounds: u32,

    /// Probability the opponent plays its bomb on an eligible round.
    pub bot_bomb_probability: f64,

    /// Earliest round on which the opponent considers its bomb.
    pub bot_bomb_earliest_round: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            bot_bomb_probability: BOT_BOMB_PROBABILITY,
            bot_bomb_earliest_round: BOT_BOMB_EARLIEST_ROUND,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the opponent's bomb probability.
    #[must_use]
    pub fn with_bot_bomb_probability(mut self, probability: f64) -> Self {
        self.bot_bomb_probability = probability;
        self
    }

    /// Set the first round on which the opponent may bomb.
    #[must_use]
    pub fn with_bot_bomb_earliest_round(mut self, round: u32) -> Self {
        self.bot_bomb_earliest_round = round;
        self
    }

    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if !(0.0..=1.0).contains(&self.bot_bomb_probability) {
            return Err(ConfigError::BombProbability(self.bot_bomb_probability));
        }
        if self.bot_bomb_earliest_round < BOT_BOMB_EARLIEST_ROUND {
            return Err(ConfigError::BombRound(self.bot_bomb_earliest_round));
        }
        Ok(())
    }
}
