//! Session-scoped games.
//!
//! - `Game`: one state machine owned by one caller
//! - `SessionStore`: one `Game` per session id, nothing shared between them

pub mod game;
pub mod store;

pub use game::{Game, SnapshotError};
pub use store::SessionStore;
