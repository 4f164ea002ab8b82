//! The session store: registry of every live game session.
//!
//! Responsible for:
//! - Allocating unique session ids (a plain monotonic counter)
//! - Building a fresh session from a puzzle template
//! - Looking sessions up for the connection pipeline
//!
//! There is no deletion or expiry sweep: sessions persist for the process
//! lifetime once created. Expired sessions just sit there inactive.
//!
//! # Concurrency note
//!
//! `GameSessionStore` is NOT thread-safe by itself — it uses a plain
//! `HashMap` and a plain counter. This is intentional: the store is owned
//! by the server state and accessed through a single mutex at that level,
//! which also makes id allocation atomic with respect to concurrent
//! `start` calls. Keeping the store lock-free here avoids hidden locking
//! overhead and keeps unit tests synchronous.

use std::collections::HashMap;

use mindmap_puzzle::PuzzleTemplate;

use crate::{GameError, GameId, GameSession, unix_now};

/// Registry of live game sessions, keyed by session id.
#[derive(Debug, Default)]
pub struct GameSessionStore {
    /// All sessions ever started in this process.
    sessions: HashMap<GameId, GameSession>,

    /// Next id to hand out. Monotonically increasing; uniqueness is the
    /// only hard requirement, the ordering is a convenience for logs.
    next_id: u64,
}

impl GameSessionStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session from a puzzle template and registers it.
    ///
    /// Allocates the next session id, builds the root node from the
    /// template's start word, stamps `start_time` with the current time,
    /// and returns the freshly stored session. Resolving the puzzle id to
    /// a template is the catalog's job and happens before this call.
    pub fn start(&mut self, template: &PuzzleTemplate) -> &GameSession {
        self.start_at(template, unix_now())
    }

    /// Like [`start`](Self::start) with an explicit creation timestamp.
    ///
    /// The pipeline always uses the real clock; tests use this to place a
    /// session at a known point in time instead of sleeping.
    pub fn start_at(
        &mut self,
        template: &PuzzleTemplate,
        start_time: f64,
    ) -> &GameSession {
        self.next_id += 1;
        let id = GameId(self.next_id);

        let session = GameSession::new(id, template, start_time);
        self.sessions.insert(id, session);

        tracing::info!(
            session_id = %id,
            puzzle_id = %template.id,
            start_word = %template.start_word,
            time_limit_seconds = template.time_limit_seconds,
            "game session started"
        );

        self.sessions.get(&id).expect("just inserted")
    }

    /// Looks up a session by id.
    ///
    /// # Errors
    /// Returns [`GameError::SessionNotFound`] if no session has this id.
    pub fn get(&self, id: GameId) -> Result<&GameSession, GameError> {
        self.sessions
            .get(&id)
            .ok_or(GameError::SessionNotFound(id))
    }

    /// Mutable lookup, for the connection pipeline.
    ///
    /// # Errors
    /// Returns [`GameError::SessionNotFound`] if no session has this id.
    pub fn get_mut(&mut self, id: GameId) -> Result<&mut GameSession, GameError> {
        self.sessions
            .get_mut(&id)
            .ok_or(GameError::SessionNotFound(id))
    }

    /// Returns the number of sessions (active or ended).
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no session has been started yet.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
