//! Shared server state: the catalog, the session store, and the
//! connection service, wired together once at startup.

use std::sync::Arc;

use mindmap_game::{ConnectionService, GameSessionStore, LengthAndPluralValidator};
use mindmap_puzzle::PuzzleCatalog;
use tokio::sync::Mutex;

/// State shared by every request handler.
///
/// The catalog is read-only after construction, so it needs no lock. The
/// session store sits behind a single mutex: that one lock serializes all
/// session reads and mutations (and makes id allocation atomic), which is
/// the mutual-exclusion guarantee the game core's duplicate/expiry checks
/// rely on. Sessions are independent, so a per-session lock would allow
/// more throughput — not worth the machinery at this scale.
pub struct AppState {
    /// Immutable puzzle registry.
    pub catalog: PuzzleCatalog,

    /// All live sessions, behind the store-wide lock.
    pub store: Mutex<GameSessionStore>,

    /// Stateless pipeline + validation strategy; no lock needed.
    pub connections: ConnectionService<LengthAndPluralValidator>,
}

/// Cheaply cloneable handle to the shared state.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Builds the shared state around a puzzle catalog.
    pub fn new(catalog: PuzzleCatalog) -> SharedState {
        Arc::new(Self {
            catalog,
            store: Mutex::new(GameSessionStore::new()),
            connections: ConnectionService::with_placeholder_validator(),
        })
    }
}
