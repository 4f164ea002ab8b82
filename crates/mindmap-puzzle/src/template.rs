//! The puzzle template: the immutable seed a game session is built from.

use serde::{Deserialize, Serialize};

/// One puzzle definition.
///
/// Templates are created when the catalog is loaded and never mutated
/// afterwards — every game started from the same template sees the same
/// start word, theme, and time limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleTemplate {
    /// Catalog key, e.g. `"puzzle_1"` or `"puzzle_daily_free"`.
    pub id: String,

    /// The word at the center of the mind map. Non-empty.
    pub start_word: String,

    /// Display theme, e.g. `"General"` or `"Daily Free"`.
    pub theme: String,

    /// Time limit for a session started from this template, in seconds.
    /// `0` means the session has no time limit.
    pub time_limit_seconds: u64,
}

impl PuzzleTemplate {
    /// Creates a template. Panics if `start_word` is empty after trimming —
    /// a template without a start word can never seed a valid map, so this
    /// is a programming error at catalog-load time, not a runtime condition.
    pub fn new(
        id: impl Into<String>,
        start_word: impl Into<String>,
        theme: impl Into<String>,
        time_limit_seconds: u64,
    ) -> Self {
        let start_word = start_word.into();
        assert!(
            !start_word.trim().is_empty(),
            "puzzle start_word must be non-empty"
        );
        Self {
            id: id.into(),
            start_word,
            theme: theme.into(),
            time_limit_seconds,
        }
    }

    /// Returns `true` if sessions from this template never expire.
    pub fn is_untimed(&self) -> bool {
        self.time_limit_seconds == 0
    }
}
