//! Game bindings for Python.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{GameConfig, GameRng};
use crate::referee::Referee;
use crate::session::Game;

/// Python wrapper for a single game with its referee.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
    referee: Referee,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for a reproducible opponent (random if omitted)
    /// - max_rounds: Rounds before the game ends
    #[new]
    #[pyo3(signature = (seed = None, max_rounds = 3))]
    fn new(seed: Option<u64>, max_rounds: u32) -> PyResult<Self> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let config = GameConfig::new().with_max_rounds(max_rounds);
        let game = Game::new(config, rng)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))?;
        Ok(Self {
            game,
            referee: Referee::new(),
        })
    }

    /// Opening message with the rules.
    fn welcome(&self) -> String {
        self.referee.welcome(self.game.config().max_rounds)
    }

    /// Submit a move and get the referee's reply.
    fn submit(&mut self, raw: &str) -> String {
        self.referee.respond(&mut self.game, raw)
    }

    /// Start over.
    fn reset(&mut self) -> String {
        self.game.reset();
        self.referee.reset(self.game.config().max_rounds)
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.game.is_over()
    }

    /// "USER WINS", "BOT WINS", "DRAW", or None while playing.
    fn winner(&self) -> Option<String> {
        self.game.winner().map(|w| w.to_string())
    }

    /// Round, score and bomb availability.
    fn status<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let status = self.game.status();
        let dict = PyDict::new_bound(py);
        dict.set_item("round", status.round)?;
        dict.set_item("score", status.score())?;
        dict.set_item("user_bomb_available", status.user_bomb_available)?;
        dict.set_item("game_over", status.game_over)?;
        Ok(dict)
    }

    /// Wire snapshot of the game state.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let snap = self.game.snapshot();
        let dict = PyDict::new_bound(py);
        dict.set_item("round_number", snap.round_number)?;
        dict.set_item("user_score", snap.user_score)?;
        dict.set_item("bot_score", snap.bot_score)?;
        dict.set_item("user_bomb_used", snap.user_bomb_used)?;
        dict.set_item("bot_bomb_used", snap.bot_bomb_used)?;
        dict.set_item("rounds_played", snap.rounds_played)?;
        dict.set_item("game_over", snap.game_over)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!("Game({})", self.game.status())
    }
}
