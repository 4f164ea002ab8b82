//! The mindmap game core: sessions, the word-connection pipeline, and scoring.
//!
//! A *session* is one player's in-progress mind map: a tree of words rooted
//! at the puzzle's start word. The player grows the tree one word at a time
//! by connecting a new word to an existing node; every accepted word earns
//! points, and the whole thing runs against the puzzle's time limit.
//!
//! # How it fits in the stack
//!
//! ```text
//! HTTP layer (above)   ← routes requests, holds the store behind a mutex
//!     ↕
//! Game core (this crate)
//!     ├─ ConnectionService  ← validates + applies one "add word" request
//!     ├─ GameSessionStore   ← registry of live sessions, id allocation
//!     ├─ GameSession        ← the per-player state machine
//!     └─ WordValidator      ← pluggable word-relatedness policy
//!     ↕
//! Puzzle catalog (below)  ← immutable templates sessions are built from
//! ```
//!
//! # Key types
//!
//! - [`GameSession`] — nodes, connections, score, active flag
//! - [`GameSessionStore`] — creates and looks up sessions
//! - [`ConnectionService`] — the ordered validation/mutation pipeline
//! - [`WordValidator`] — the strategy trait for "are these words related?"
//! - [`GameError`] — everything that can go wrong with a request

mod connect;
mod error;
mod session;
mod store;
mod validate;

pub use connect::ConnectionService;
pub use error::GameError;
pub use session::{ConnectionRequest, GameId, GameSession, WordNode, normalize_word, unix_now};
pub use store::GameSessionStore;
pub use validate::{LengthAndPluralValidator, WordValidator};
