//! Opponent move selection.
//!
//! Policies are trait-based so tests can swap the randomized opponent
//! for a scripted one:
//! - `BombingOpponent`: uniform over rock/paper/scissors, with a chance
//!   of spending its bomb from round 2 on
//! - `ScriptedOpponent`: replays a fixed sequence

use log::debug;

use crate::core::{GameConfig, GameRng, GameState, Move};

/// Chooses the opponent's move for the current round.
///
/// Implementations must never return `Move::Bomb` once
/// `state.bot_bomb_used()` is true, nor on round 1.
pub trait OpponentPolicy: Send + Sync {
    /// Pick a move. All randomness comes from `rng`.
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Move;
}

/// Randomized opponent with a one-time bomb.
#[derive(Clone, Debug, PartialEq)]
pub struct BombingOpponent {
    /// Chance of bombing on an eligible round.
    pub bomb_probability: f64,
    /// First eligible round. Never lower than 2.
    pub earliest_round: u32,
}

impl Default for BombingOpponent {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl BombingOpponent {
    /// Build from the opponent fields of a config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            bomb_probability: config.bot_bomb_probability,
            earliest_round: config.bot_bomb_earliest_round,
        }
    }

    fn may_bomb(&self, state: &GameState) -> bool {
        !state.bot_bomb_used() && state.round_number() >= self.earliest_round.max(2)
    }
}

impl OpponentPolicy for BombingOpponent {
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Move {
        if self.may_bomb(state) && rng.gen_bool(self.bomb_probability) {
            debug!("opponent plays bomb in round {}", state.round_number());
            return Move::Bomb;
        }

        let choice = rng.choose(&Move::BASIC).copied().unwrap_or(Move::Rock);
        debug!("opponent plays {} in round {}", choice, state.round_number());
        choice
    }
}

/// Opponent that replays a fixed sequence, one move per round.
///
/// Round `n` plays `script[(n - 1) % len]`. A scripted bomb that would
/// be illegal (round 1, or bomb already spent) is replaced by rock.
/// An empty script always plays rock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedOpponent {
    script: Vec<Move>,
}

impl ScriptedOpponent {
    #[must_use]
    pub fn new(script: impl Into<Vec<Move>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Always play the same move.
    #[must_use]
    pub fn always(mv: Move) -> Self {
        Self::new(vec![mv])
    }
}

impl OpponentPolicy for ScriptedOpponent {
    fn choose(&self, state: &GameState, _rng: &mut GameRng) -> Move {
        if self.script.is_empty() {
            return Move::Rock;
        }
        let index = (state.round_number().saturating_sub(1) as usize) % self.script.len();
        match self.script[index] {
            Move::Bomb if state.bot_bomb_used() || state.round_number() < 2 => Move::Rock,
            mv => mv,
        }
    }
}
