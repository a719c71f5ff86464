//! Python bindings for the rps-plus referee.
//!
//! # Quick Start
//!
//! ```python
//! import rps_plus
//!
//! game = rps_plus.Game(seed=42)
//! print(game.welcome())
//! print(game.submit("rock"))
//! print(game.snapshot())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rps_plus: rock, paper, scissors, bomb.
#[pymodule]
fn rps_plus(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}
