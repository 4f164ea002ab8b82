//! The puzzle catalog: a read-only registry of puzzle templates.

use std::collections::HashMap;

use crate::{CatalogError, PuzzleTemplate};

/// Registry of puzzle templates, keyed by puzzle id.
///
/// The catalog is populated once at construction and read-only afterwards —
/// there is no insert/remove API past the builder methods. A production
/// deployment would back this with a persistent store; for now the seed
/// data lives in [`with_defaults`](Self::with_defaults).
#[derive(Debug, Clone, Default)]
pub struct PuzzleCatalog {
    templates: HashMap<String, PuzzleTemplate>,
}

impl PuzzleCatalog {
    /// Creates an empty catalog. Mostly useful in tests; the server uses
    /// [`with_defaults`](Self::with_defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from an explicit set of templates.
    pub fn from_templates(
        templates: impl IntoIterator<Item = PuzzleTemplate>,
    ) -> Self {
        let templates = templates
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect::<HashMap<_, _>>();
        tracing::info!(puzzles = templates.len(), "puzzle catalog loaded");
        Self { templates }
    }

    /// Creates the catalog with the built-in seed puzzles.
    pub fn with_defaults() -> Self {
        Self::from_templates([
            // 3 minutes on the general puzzle, 2 on the daily one.
            PuzzleTemplate::new("puzzle_1", "Technology", "General", 180),
            PuzzleTemplate::new("puzzle_daily_free", "Nature", "Daily Free", 120),
        ])
    }

    /// Looks up a template by puzzle id.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if no puzzle has this id.
    pub fn get(&self, puzzle_id: &str) -> Result<&PuzzleTemplate, CatalogError> {
        self.templates
            .get(puzzle_id)
            .ok_or_else(|| CatalogError::NotFound(puzzle_id.to_string()))
    }

    /// Returns the number of puzzles in the catalog.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if the catalog holds no puzzles.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
