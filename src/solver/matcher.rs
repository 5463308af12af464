//! Subset matching of a single word against a letter pool

use crate::core::LetterPool;

/// Check whether `word` can be spelled using letters from `pool`
///
/// Each pool letter may be used at most as often as it occurs in the pool.
/// Matching is case-sensitive; callers normalize both sides first. The empty
/// word always matches.
///
/// # Examples
/// ```
/// use letter_words::core::LetterPool;
/// use letter_words::solver::is_subset_word;
///
/// let pool = LetterPool::new("cat");
/// assert!(is_subset_word(&pool, "act"));
/// assert!(!is_subset_word(&pool, "dog"));
/// assert!(!is_subset_word(&pool, "catt"));
/// ```
#[must_use]
pub fn is_subset_word(pool: &LetterPool, word: &str) -> bool {
    if word.chars().count() > pool.len() {
        return false;
    }

    let mut remaining = pool.working_copy();
    word.chars().all(|ch| match remaining.get_mut(&ch) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    })
}
