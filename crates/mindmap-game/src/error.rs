//! Error types for the game core.
//!
//! Each crate defines its own error enum so a `GameError` always means
//! "the request against a session was rejected", never a catalog or
//! transport problem.

use crate::GameId;

/// Everything that can make a session request fail.
///
/// The `#[error("...")]` texts double as the HTTP error messages the
/// front-end shows, so they are written for players, not for logs. All of
/// these are terminal for the single request — the store and every other
/// session remain fully usable afterwards.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No session exists with this id.
    #[error("Game not found")]
    SessionNotFound(GameId),

    /// The session's time limit has elapsed. The expiry check that raises
    /// this also flips the session inactive (once) as a side effect.
    #[error("Time limit exceeded")]
    TimeExpired,

    /// The session previously ended; no further mutation is allowed.
    #[error("Game is no longer active")]
    Inactive,

    /// The requested parent node is not part of this session's map.
    #[error("Parent node '{0}' not found in the map")]
    ParentNotFound(String),

    /// The new word was empty after trimming whitespace.
    #[error("New word cannot be empty")]
    EmptyWord,

    /// The new word is the parent word itself (case-insensitive).
    #[error("Cannot connect a word to itself")]
    SelfLoop(String),

    /// The word is already somewhere in the map. Word identity is
    /// case-insensitive and global to the session, not just among siblings.
    #[error("Word '{0}' already exists in the map")]
    DuplicateWord(String),

    /// The validation strategy rejected the parent→word connection.
    #[error("Connection between '{parent}' and '{word}' is not considered valid")]
    InvalidConnection { parent: String, word: String },
}
