//! Puzzle definitions for the mindmap game server.
//!
//! A *puzzle* is the immutable template a game is started from: the word
//! at the center of the mind map, a theme, and a time limit. This crate
//! holds the templates and the catalog that serves them.
//!
//! # Key types
//!
//! - [`PuzzleTemplate`] — one puzzle definition (start word, theme, limit)
//! - [`PuzzleCatalog`] — read-only registry of templates, keyed by id
//! - [`CatalogError`] — lookup failures
//!
//! The catalog is an owned value, not a global: the server constructs one
//! at startup (usually via [`PuzzleCatalog::with_defaults`]) and injects it
//! wherever puzzles need to be resolved. Tests get isolation for free by
//! building their own instances.

mod catalog;
mod error;
mod template;

pub use catalog::PuzzleCatalog;
pub use error::CatalogError;
pub use template::PuzzleTemplate;
