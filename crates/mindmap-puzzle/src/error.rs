//! Error types for the puzzle catalog.

/// Errors that can occur when resolving puzzles.
///
/// The message text is what ends up in HTTP error bodies, so it stays
/// front-end friendly rather than debug-oriented.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No puzzle with this id exists in the catalog.
    #[error("Puzzle not found")]
    NotFound(String),
}

impl CatalogError {
    /// The puzzle id that failed to resolve. Useful for logging, where
    /// the display message deliberately omits it.
    pub fn puzzle_id(&self) -> &str {
        match self {
            Self::NotFound(id) => id,
        }
    }
}
