//! Player-facing messages.
//!
//! The referee only reads results that the rules have already produced.
//! Nothing here can change a `GameState`.

pub mod flavor;
pub mod narrator;

pub use flavor::{FlavorError, FlavorText, NoFlavor};
pub use narrator::Referee;
