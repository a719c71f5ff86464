//! Optional decoration for round announcements.
//!
//! A flavor source runs after a round is already decided. Its output is
//! appended to the announcement; its failures are logged and dropped.

use thiserror::Error;

use crate::core::{GameState, RoundRecord};

/// Flavor source failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlavorError {
    #[error("flavor source unavailable: {0}")]
    Unavailable(String),
}

/// Produces a line of commentary for a resolved round.
pub trait FlavorText: Send + Sync {
    /// Commentary for `record`, given the state after the round.
    fn flavor(&self, record: &RoundRecord, state: &GameState) -> Result<String, FlavorError>;
}

/// No commentary.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFlavor;

impl FlavorText for NoFlavor {
    fn flavor(&self, _record: &RoundRecord, _state: &GameState) -> Result<String, FlavorError> {
        Ok(String::new())
    }
}

impl<F> FlavorText for F
where
    F: Fn(&RoundRecord, &GameState) -> Result<String, FlavorError> + Send + Sync,
{
    fn flavor(&self, record: &RoundRecord, state: &GameState) -> Result<String, FlavorError> {
        self(record, state)
    }
}
