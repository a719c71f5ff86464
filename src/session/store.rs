//! Per-session game storage.
//!
//! Each session id maps to its own `Game`. Session RNGs are derived from
//! the store seed and the id, so games never share mutable state and a
//! given (seed, id) pair always sees the same opponent.

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{ConfigError, GameConfig, GameRng, Status};
use crate::opponent::BombingOpponent;
use crate::rules::{MoveError, Submission};

use super::game::Game;

/// Games keyed by session id.
#[derive(Debug)]
pub struct SessionStore {
    config: GameConfig,
    root: GameRng,
    games: FxHashMap<String, Game>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            root: GameRng::new(seed),
            games: FxHashMap::default(),
        })
    }

    fn entry(&mut self, session: &str) -> &mut Game {
        let config = &self.config;
        let root = &self.root;
        self.games.entry(session.to_string()).or_insert_with(|| {
            debug!("creating game for session {}", session);
            let policy = BombingOpponent::from_config(config);
            Game::assemble(config.clone(), policy, root.for_context(session))
        })
    }

    /// Start a new game for `session`, replacing any game in progress.
    pub fn start(&mut self, session: &str) -> &Game {
        let game = self.entry(session);
        game.reset();
        game
    }

    /// Submit a move, creating the session's game on first use.
    pub fn submit(&mut self, session: &str, raw: &str) -> Result<Submission, MoveError> {
        self.entry(session).submit(raw)
    }

    /// Status of a session's game.
    #[must_use]
    pub fn status(&self, session: &str) -> Option<Status> {
        self.games.get(session).map(Game::status)
    }

    #[must_use]
    pub fn get(&self, session: &str) -> Option<&Game> {
        self.games.get(session)
    }

    /// Drop a session. Returns whether it existed.
    pub fn end(&mut self, session: &str) -> bool {
        self.games.remove(session).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = SessionStore::new(GameConfig::default(), 7).unwrap();

        store.submit("alice", "rock").unwrap();
        store.submit("alice", "lizard").unwrap();
        store.start("bob");

        assert_eq!(store.len(), 2);
        assert_eq!(store.status("alice").unwrap().round, 3);
        assert_eq!(store.status("bob").unwrap().round, 1);
        assert!(store.status("carol").is_none());
    }

    #[test]
    fn test_start_resets_existing() {
        let mut store = SessionStore::new(GameConfig::default(), 7).unwrap();
        for _ in 0..3 {
            store.submit("alice", "paper").unwrap();
        }
        assert!(store.status("alice").unwrap().game_over);
        assert_eq!(store.submit("alice", "rock"), Err(MoveError::GameAlreadyOver));

        let game = store.start("alice");
        assert_eq!(game.state().round_number(), 1);
        assert!(store.submit("alice", "rock").is_ok());
    }

    #[test]
    fn test_same_seed_same_sessions() {
        let mut a = SessionStore::new(GameConfig::default(), 99).unwrap();
        let mut b = SessionStore::new(GameConfig::default(), 99).unwrap();

        for mv in ["rock", "paper", "scissors"] {
            assert_eq!(a.submit("s1", mv), b.submit("s1", mv));
        }
        assert_eq!(a.get("s1").unwrap().state(), b.get("s1").unwrap().state());
    }

    #[test]
    fn test_end_session() {
        let mut store = SessionStore::new(GameConfig::default(), 1).unwrap();
        store.start("x");
        assert!(store.end("x"));
        assert!(!store.end("x"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = GameConfig::new().with_bot_bomb_probability(2.0);
        assert!(SessionStore::new(config, 0).is_err());
    }
}
