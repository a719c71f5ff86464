//! A single game owned by one caller.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, GameSnapshot, GameState, StateError, Status,
    Winner,
};
use crate::opponent::{BombingOpponent, OpponentPolicy};
use crate::rules::{GameLogic, MoveError, Submission};

/// Failure to park or resume a game.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("checkpoint encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("checkpoint carries an invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("checkpoint carries an unreachable state: {0}")]
    State(#[from] StateError),
}

#[derive(Serialize, Deserialize)]
struct Checkpoint {
    config: GameConfig,
    state: GameState,
    rng: GameRngState,
}

/// One game in progress: rules, state, opponent and its RNG.
///
/// ```
/// use rps_plus::session::Game;
///
/// let mut game = Game::seeded(42);
/// let submission = game.submit("rock").unwrap();
/// assert_eq!(submission.round_number(), 1);
/// assert_eq!(game.state().round_number(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Game<P = BombingOpponent> {
    logic: GameLogic,
    state: GameState,
    policy: P,
    rng: GameRng,
}

impl Game<BombingOpponent> {
    /// Standard game with the randomized opponent.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let config = GameConfig::default();
        let policy = BombingOpponent::from_config(&config);
        Self::assemble(config, policy, GameRng::new(seed))
    }

    /// Game with a custom config and the randomized opponent.
    pub fn new(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        let policy = BombingOpponent::from_config(&config);
        Self::with_policy(config, policy, rng)
    }
}

impl<P: OpponentPolicy> Game<P> {
    /// Game with an explicit opponent policy.
    pub fn with_policy(config: GameConfig, policy: P, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, policy, rng))
    }

    /// Build without validating `config`.
    pub(super) fn assemble(config: GameConfig, policy: P, rng: GameRng) -> Self {
        let logic = GameLogic::new(config);
        let state = logic.start_game();
        debug!("new game, seed {}", rng.seed());
        Self {
            logic,
            state,
            policy,
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.logic.config()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.state.winner()
    }

    /// Play one raw input. See `GameLogic::submit_move`.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, MoveError> {
        let (next, submission) =
            self.logic
                .submit_move(&self.state, raw, &self.policy, &mut self.rng)?;
        self.state = next;
        Ok(submission)
    }

    /// Discard the current game and start over. The RNG stream continues.
    pub fn reset(&mut self) -> &GameState {
        info!("game reset at round {}", self.state.round_number());
        self.state = self.logic.start_game();
        &self.state
    }

    /// Encode config, state and RNG position.
    pub fn checkpoint(&self) -> Result<Vec<u8>, SnapshotError> {
        let checkpoint = Checkpoint {
            config: self.logic.config().clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        };
        Ok(bincode::serialize(&checkpoint)?)
    }

    /// Resume a game from `checkpoint` bytes with the given opponent.
    ///
    /// The config must validate and the state must be reachable under it.
    pub fn restore(bytes: &[u8], policy: P) -> Result<Self, SnapshotError> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        checkpoint.config.validate()?;
        checkpoint.state.check(checkpoint.config.max_rounds)?;
        Ok(Self {
            logic: GameLogic::new(checkpoint.config),
            state: checkpoint.state,
            policy,
            rng: GameRng::from_state(&checkpoint.rng),
        })
    }
}
