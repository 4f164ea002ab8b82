//! End-to-end tests for the game core: catalog → store → connection
//! pipeline, exercised the way the HTTP layer drives it.
//!
//! Time-dependent behavior is tested by starting sessions with a
//! back-dated `start_time` (`start_at`), never by sleeping.

use mindmap_game::{
    ConnectionRequest, ConnectionService, GameError, GameSessionStore,
    LengthAndPluralValidator, unix_now,
};
use mindmap_puzzle::PuzzleCatalog;

// -- Helpers ---------------------------------------------------------------

fn service() -> ConnectionService<LengthAndPluralValidator> {
    ConnectionService::with_placeholder_validator()
}

fn request(parent: &str, word: &str) -> ConnectionRequest {
    ConnectionRequest {
        parent_node_id: parent.to_string(),
        new_word: word.to_string(),
    }
}

// =========================================================================
// Full game flow
// =========================================================================

#[test]
fn test_start_from_catalog_then_grow_map() {
    // The server's exact flow: resolve the puzzle in the catalog, start a
    // session from the template, then connect words one by one.
    let catalog = PuzzleCatalog::with_defaults();
    let mut store = GameSessionStore::new();
    let svc = service();

    let template = catalog.get("puzzle_1").expect("seed puzzle");
    let id = store.start(template).id;

    // Scenario: a fresh session has exactly the root, score 0, active.
    {
        let session = store.get(id).unwrap();
        let root = session.nodes.get("technology").expect("root node");
        assert_eq!(root.word, "Technology");
        assert_eq!(root.parent_id, None);
        assert_eq!(session.score, 0);
        assert!(session.active);
    }

    // Connect "Internet " under the root: normalized id, trimmed display
    // word, score = len("Internet") = 8.
    let session = svc
        .connect(&mut store, id, &request("technology", "Internet "))
        .expect("valid connection");
    assert_eq!(session.nodes.get("internet").unwrap().word, "Internet");
    assert_eq!(
        session.connections,
        vec![("technology".to_string(), "internet".to_string())]
    );
    assert_eq!(session.score, 8);

    // Grow a deeper branch and a sibling.
    svc.connect(&mut store, id, &request("internet", "website"))
        .unwrap();
    let session = svc
        .connect(&mut store, id, &request("technology", "computer"))
        .unwrap();

    assert_eq!(session.node_count(), 4);
    assert_eq!(session.score, 8 + 7 + 8);
}

#[test]
fn test_two_sessions_from_one_puzzle_are_isolated() {
    let catalog = PuzzleCatalog::with_defaults();
    let mut store = GameSessionStore::new();
    let svc = service();
    let template = catalog.get("puzzle_daily_free").unwrap().clone();

    let first = store.start(&template).id;
    let second = store.start(&template).id;
    assert_ne!(first, second);

    svc.connect(&mut store, first, &request("nature", "forest"))
        .unwrap();

    // "forest" is a duplicate only inside the first session.
    let result = svc.connect(&mut store, second, &request("nature", "forest"));
    assert!(result.is_ok(), "word uniqueness is per-session");
    assert_eq!(store.get(first).unwrap().score, 6);
    assert_eq!(store.get(second).unwrap().score, 6);
}

// =========================================================================
// Invariants across mixed accept/reject traffic
// =========================================================================

#[test]
fn test_tree_shape_and_uniqueness_hold_throughout() {
    let catalog = PuzzleCatalog::with_defaults();
    let mut store = GameSessionStore::new();
    let svc = service();
    let id = store.start(catalog.get("puzzle_1").unwrap()).id;

    // A burst of requests, some valid, some not.
    let attempts = [
        ("technology", "internet"),      // ok
        ("technology", "ab"),            // too short
        ("internet", "browser"),         // ok
        ("browser", "internet"),         // duplicate
        ("nonexistent", "gadget"),       // unknown parent
        ("technology", "technologys"),   // naive plural
        ("browser", "tabs"),             // ok
        ("technology", ""),              // empty
        ("technology", " TECHNOLOGY "),  // self-loop
    ];
    for (parent, word) in attempts {
        let _ = svc.connect(&mut store, id, &request(parent, word));
    }

    let session = store.get(id).unwrap();

    // Tree shape: one edge per non-root node, every parent present.
    assert_eq!(session.connections.len(), session.node_count() - 1);
    for (parent, child) in &session.connections {
        assert!(session.nodes.contains_key(parent));
        assert!(session.nodes.contains_key(child));
    }

    // Uniqueness: ids are the normalized words, each exactly once, and
    // every node's key matches its id.
    for (key, node) in &session.nodes {
        assert_eq!(key, &node.id);
        assert_eq!(node.id, node.word.trim().to_lowercase());
    }

    // Only the three accepted words scored: internet + browser + tabs.
    assert_eq!(session.score, 8 + 7 + 4);
    assert!(session.active);
}

// =========================================================================
// Expiry lifecycle
// =========================================================================

#[test]
fn test_expiry_flips_once_and_rejects_all_later_attempts() {
    let catalog = PuzzleCatalog::with_defaults();
    let mut store = GameSessionStore::new();
    let svc = service();

    // 120-second daily puzzle, started 10 minutes ago.
    let template = catalog.get("puzzle_daily_free").unwrap();
    let id = store.start_at(template, unix_now() - 600.0).id;

    // First post-expiry attempt: TimeExpired, and the session flips
    // inactive as a side effect even though the request failed.
    let first = svc.connect(&mut store, id, &request("nature", "forest"));
    assert!(matches!(first, Err(GameError::TimeExpired)));
    assert!(!store.get(id).unwrap().active);

    // Later attempts: the elapsed check still derives expiry, so the
    // answer stays TimeExpired, deterministically.
    let second = svc.connect(&mut store, id, &request("nature", "river"));
    assert!(matches!(second, Err(GameError::TimeExpired)));

    // Nothing ever mutated, and the flip happened exactly once (still
    // inactive, still pristine).
    let session = store.get(id).unwrap();
    assert_eq!(session.node_count(), 1);
    assert!(session.connections.is_empty());
    assert_eq!(session.score, 0);
}

#[test]
fn test_expiry_of_one_session_leaves_others_playable() {
    let catalog = PuzzleCatalog::with_defaults();
    let mut store = GameSessionStore::new();
    let svc = service();
    let template = catalog.get("puzzle_1").unwrap().clone();

    let expired = store.start_at(&template, unix_now() - 10_000.0).id;
    let live = store.start(&template).id;

    assert!(matches!(
        svc.connect(&mut store, expired, &request("technology", "internet")),
        Err(GameError::TimeExpired)
    ));

    // The other session is untouched by its neighbor's expiry.
    let session = svc
        .connect(&mut store, live, &request("technology", "internet"))
        .expect("live session still accepts words");
    assert!(session.active);
    assert_eq!(session.score, 8);
}
