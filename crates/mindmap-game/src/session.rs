//! Session types: the data structures that make up one player's mind map.
//!
//! A session tracks:
//! - WHAT has been placed (`nodes`, a tree of words keyed by normalized form)
//! - HOW it is shaped (`connections`, the parent→child edges in insertion order)
//! - HOW WELL the player is doing (`score`)
//! - WHETHER play can continue (`active`, plus `start_time` for the limit)

use std::collections::HashMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use mindmap_puzzle::PuzzleTemplate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity helpers
// ---------------------------------------------------------------------------

/// A unique identifier for a game session.
///
/// Newtype over `u64` so a session id can't be confused with a score or a
/// counter. `#[serde(transparent)]` keeps the JSON form a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}

/// Normalizes a word into its identity form: trimmed, lower-cased.
///
/// Node ids, duplicate checks, and self-loop checks all operate on this
/// form; the original-case trimmed word is kept separately for display.
/// Internal whitespace in multi-word entries is preserved as typed.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Current wall-clock time as fractional seconds since the Unix epoch.
///
/// Wall-clock (not monotonic) time is deliberate: `start_time` is part of
/// the session's serialized state and clients interpret it as a timestamp.
pub fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// WordNode
// ---------------------------------------------------------------------------

/// A single word placed in the mind map.
///
/// Created exactly once when a connection is accepted, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNode {
    /// The node's identity: the normalized (trimmed, lower-cased) word.
    /// Unique within the session.
    pub id: String,

    /// The display form: trimmed but original case, exactly as typed.
    pub word: String,

    /// The id of the node this word was connected to. `None` only for
    /// the root node.
    pub parent_id: Option<String>,
}

// ---------------------------------------------------------------------------
// ConnectionRequest
// ---------------------------------------------------------------------------

/// One "add word" request against a session. Input only, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionRequest {
    /// Which existing node the new word should attach to.
    pub parent_node_id: String,

    /// The proposed word, raw — arbitrary case and whitespace.
    pub new_word: String,
}

// ---------------------------------------------------------------------------
// GameSession
// ---------------------------------------------------------------------------

/// One player's active mind-map instance.
///
/// The state machine is small but strict:
///
/// ```text
///   Active ──(connect accepted)──→ Active
///   Active ──(elapsed > limit, checked lazily on connect)──→ Expired
/// ```
///
/// Expiry is terminal: once `active` is `false`, no node, connection, or
/// score mutation ever happens again. There is no "solved" end state and
/// no explicit stop operation — an unexpired session stays playable until
/// the process exits.
///
/// Invariants maintained by the connection pipeline:
/// - `nodes` is a tree rooted at the normalized start word; every non-root
///   node's parent existed in `nodes` when it was inserted.
/// - `connections.len() == nodes.len() - 1`, mirroring insertion order.
/// - `score` never decreases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Unique session id, allocated by the store.
    pub id: GameId,

    /// Which puzzle this session was started from.
    pub puzzle_id: String,

    /// Copied from the template so a session is self-describing.
    pub start_word: String,

    /// Copied from the template.
    pub theme: String,

    /// Copied from the template. `0` means no limit.
    pub time_limit_seconds: u64,

    /// Unix timestamp (fractional seconds) of session creation.
    pub start_time: f64,

    /// The mind map itself, keyed by normalized word.
    pub nodes: HashMap<String, WordNode>,

    /// Append-only `(parent_id, child_id)` pairs in insertion order.
    pub connections: Vec<(String, String)>,

    /// Total points earned. One accepted word scores its display length.
    pub score: u64,

    /// `false` once the session has ended. Checked before every mutation.
    pub active: bool,
}

impl GameSession {
    /// Builds a fresh session from a puzzle template.
    ///
    /// The root node's id is the *normalized* start word, so connection
    /// requests can reference it without worrying about the template's
    /// casing. The display form keeps the template's original case.
    pub fn new(id: GameId, template: &PuzzleTemplate, start_time: f64) -> Self {
        let root_id = normalize_word(&template.start_word);
        let root = WordNode {
            id: root_id.clone(),
            word: template.start_word.clone(),
            parent_id: None,
        };

        Self {
            id,
            puzzle_id: template.id.clone(),
            start_word: template.start_word.clone(),
            theme: template.theme.clone(),
            time_limit_seconds: template.time_limit_seconds,
            start_time,
            nodes: HashMap::from([(root_id, root)]),
            connections: Vec::new(),
            score: 0,
            active: true,
        }
    }

    /// The root node's id (the normalized start word).
    pub fn root_id(&self) -> String {
        normalize_word(&self.start_word)
    }

    /// Returns `true` if the time limit has elapsed as of `now`.
    ///
    /// Strictly greater-than: a session checked exactly at the limit is
    /// still playable. A limit of `0` means the session never expires.
    pub fn is_expired_at(&self, now: f64) -> bool {
        self.time_limit_seconds > 0
            && now - self.start_time > self.time_limit_seconds as f64
    }

    /// Number of words placed, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> PuzzleTemplate {
        PuzzleTemplate::new("puzzle_1", "Technology", "General", 180)
    }

    // =====================================================================
    // normalize_word()
    // =====================================================================

    #[test]
    fn test_normalize_word_trims_and_lowercases() {
        assert_eq!(normalize_word("  Internet "), "internet");
        assert_eq!(normalize_word("TECHNOLOGY"), "technology");
        assert_eq!(normalize_word("already"), "already");
    }

    #[test]
    fn test_normalize_word_preserves_internal_whitespace() {
        // Implementer's choice, pinned here: multi-word entries keep their
        // internal spacing; only the ends are trimmed.
        assert_eq!(normalize_word("  Ice  Cream "), "ice  cream");
    }

    #[test]
    fn test_normalize_word_whitespace_only_becomes_empty() {
        assert_eq!(normalize_word("   "), "");
        assert_eq!(normalize_word(""), "");
    }

    // =====================================================================
    // GameSession::new()
    // =====================================================================

    #[test]
    fn test_new_session_has_normalized_root_and_zero_score() {
        let session = GameSession::new(GameId(1), &template(), 100.0);

        assert_eq!(session.node_count(), 1);
        let root = session.nodes.get("technology").expect("root node");
        assert_eq!(root.id, "technology");
        assert_eq!(root.word, "Technology", "display keeps original case");
        assert_eq!(root.parent_id, None);

        assert!(session.connections.is_empty());
        assert_eq!(session.score, 0);
        assert!(session.active);
        assert_eq!(session.start_time, 100.0);
        assert_eq!(session.root_id(), "technology");
    }

    #[test]
    fn test_new_session_copies_template_fields() {
        let session = GameSession::new(GameId(3), &template(), 0.0);

        assert_eq!(session.puzzle_id, "puzzle_1");
        assert_eq!(session.start_word, "Technology");
        assert_eq!(session.theme, "General");
        assert_eq!(session.time_limit_seconds, 180);
    }

    // =====================================================================
    // is_expired_at()
    // =====================================================================

    #[test]
    fn test_is_expired_at_strictly_after_limit() {
        let session = GameSession::new(GameId(1), &template(), 1000.0);

        assert!(!session.is_expired_at(1000.0), "just started");
        assert!(!session.is_expired_at(1180.0), "exactly at the limit");
        assert!(session.is_expired_at(1180.5), "past the limit");
    }

    #[test]
    fn test_is_expired_at_zero_limit_never_expires() {
        let untimed = PuzzleTemplate::new("p", "Word", "T", 0);
        let session = GameSession::new(GameId(1), &untimed, 1000.0);

        assert!(!session.is_expired_at(f64::MAX));
    }

    // =====================================================================
    // Display / serialization shape
    // =====================================================================

    #[test]
    fn test_game_id_display() {
        assert_eq!(GameId(42).to_string(), "game-42");
    }
}
