//! The connection pipeline: validating and applying one "add word" request.
//!
//! This is where all the session invariants are enforced. Every check
//! happens before any mutation, so a rejected request leaves the session
//! byte-for-byte unchanged — with one deliberate exception: the lazy expiry
//! check flips a timed-out session inactive even though the triggering
//! request fails.

use crate::{
    ConnectionRequest, GameError, GameId, GameSession, GameSessionStore,
    LengthAndPluralValidator, WordNode, WordValidator, normalize_word, unix_now,
};

/// Orchestrates validation, mutation, and scoring for connection requests.
///
/// Holds the [`WordValidator`] strategy; the session data itself lives in
/// the [`GameSessionStore`] and is borrowed per call. The service is
/// stateless apart from the validator, so one instance serves every
/// session.
#[derive(Debug, Clone, Default)]
pub struct ConnectionService<V: WordValidator> {
    validator: V,
}

impl ConnectionService<LengthAndPluralValidator> {
    /// Creates a service with the placeholder validation policy.
    pub fn with_placeholder_validator() -> Self {
        Self::new(LengthAndPluralValidator)
    }
}

impl<V: WordValidator> ConnectionService<V> {
    /// Creates a service with the given validation strategy.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Applies one connection request to a session.
    ///
    /// Returns the updated session on success. The checks run in a fixed
    /// order and each failure short-circuits with its own [`GameError`]:
    ///
    /// 1. session lookup → [`SessionNotFound`](GameError::SessionNotFound)
    /// 2. lazy expiry → [`TimeExpired`](GameError::TimeExpired), flipping
    ///    `active` to `false` the first time
    /// 3. ended session → [`Inactive`](GameError::Inactive)
    /// 4. parent lookup → [`ParentNotFound`](GameError::ParentNotFound)
    /// 5. empty word → [`EmptyWord`](GameError::EmptyWord)
    /// 6. word == parent → [`SelfLoop`](GameError::SelfLoop)
    /// 7. word already in map → [`DuplicateWord`](GameError::DuplicateWord)
    /// 8. validator says no → [`InvalidConnection`](GameError::InvalidConnection)
    ///
    /// On success the new node is inserted, the `(parent, child)` edge is
    /// appended, and the score grows by the display word's character count.
    pub fn connect<'store>(
        &self,
        store: &'store mut GameSessionStore,
        session_id: GameId,
        request: &ConnectionRequest,
    ) -> Result<&'store GameSession, GameError> {
        let session = store.get_mut(session_id)?;

        // Lazy expiry: there is no background timer, the limit is enforced
        // on the next attempt. The flip to inactive happens exactly once
        // and sticks even though this request fails.
        if session.is_expired_at(unix_now()) {
            if session.active {
                session.active = false;
                tracing::info!(
                    %session_id,
                    score = session.score,
                    words = session.node_count(),
                    "session ended: time limit exceeded"
                );
            }
            return Err(GameError::TimeExpired);
        }

        if !session.active {
            return Err(GameError::Inactive);
        }

        // Identity form for uniqueness checks, display form for storage
        // and scoring.
        let display_word = request.new_word.trim();
        let normalized = normalize_word(&request.new_word);

        let parent_word = session
            .nodes
            .get(&request.parent_node_id)
            .map(|node| node.word.clone())
            .ok_or_else(|| {
                GameError::ParentNotFound(request.parent_node_id.clone())
            })?;

        if normalized.is_empty() {
            return Err(GameError::EmptyWord);
        }

        if normalized == parent_word.to_lowercase() {
            return Err(GameError::SelfLoop(display_word.to_string()));
        }

        // Word identity is global to the session: the same word can't
        // appear twice anywhere in the map, not just under this parent.
        if session.nodes.contains_key(&normalized) {
            return Err(GameError::DuplicateWord(normalized));
        }

        if !self.validator.is_valid(&parent_word, &normalized) {
            return Err(GameError::InvalidConnection {
                parent: parent_word,
                word: normalized,
            });
        }

        // All checks passed: insert the node, then the mirroring edge,
        // keeping `connections.len() == nodes.len() - 1` at every step.
        let gained = display_word.chars().count() as u64;
        session.nodes.insert(
            normalized.clone(),
            WordNode {
                id: normalized.clone(),
                word: display_word.to_string(),
                parent_id: Some(request.parent_node_id.clone()),
            },
        );
        session
            .connections
            .push((request.parent_node_id.clone(), normalized));
        session.score += gained;

        tracing::info!(
            %session_id,
            word = display_word,
            parent = %parent_word,
            gained,
            score = session.score,
            "word connected"
        );

        Ok(session)
    }
}
