//! Word-connection validation: the strategy hook for "are these related?"
//!
//! The game core doesn't decide what makes a word a legitimate association —
//! that's a product question (dictionary lookup? word embeddings? theme
//! rules?) and the answer will change without the pipeline caring. So the
//! pipeline talks to a [`WordValidator`] trait, and the current placeholder
//! policy lives in [`LengthAndPluralValidator`].
//!
//! Swapping in a real implementation later means implementing the trait and
//! handing it to `ConnectionService` — no pipeline changes.

/// Decides whether a candidate word may attach to a given parent word.
///
/// # Contract
///
/// - Stateless and deterministic: the same inputs always give the same
///   answer. Log output is allowed but is not part of the contract.
/// - `Send + Sync` so one validator instance can serve concurrent requests.
/// - Called with the parent's display word and the candidate's *normalized*
///   (trimmed, lower-cased) form. Structural checks — empty word, self-loop,
///   duplicates — happen before the validator and are not its job.
pub trait WordValidator: Send + Sync + 'static {
    /// Returns `true` if `candidate` is an acceptable association for
    /// `parent_word`.
    fn is_valid(&self, parent_word: &str, candidate: &str) -> bool;
}

/// The placeholder validation policy.
///
/// Two cheap structural guards stand in for real relatedness checking:
///
/// 1. Reject words of two characters or fewer.
/// 2. Reject the naive plural of the parent (`parent + "s"`,
///    case-insensitive).
///
/// Everything else is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthAndPluralValidator;

impl WordValidator for LengthAndPluralValidator {
    fn is_valid(&self, parent_word: &str, candidate: &str) -> bool {
        // Character count, not byte length — "héé" is three characters.
        if candidate.chars().count() <= 2 {
            tracing::debug!(word = candidate, "validation failed: word too short");
            return false;
        }

        let mut naive_plural = parent_word.to_lowercase();
        naive_plural.push('s');
        if candidate.to_lowercase() == naive_plural {
            tracing::debug!(
                word = candidate,
                parent = parent_word,
                "validation failed: naive plural of parent"
            );
            return false;
        }

        true
    }
}
