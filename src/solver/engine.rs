//! Dictionary-wide lookup
//!
//! Runs the matcher over every dictionary entry, groups the hits by length and
//! renders them.

use super::matcher::is_subset_word;
use crate::core::{LengthGroups, LetterPool};
use crate::output::formatters::format_groups;
use rayon::prelude::*;

/// Find every dictionary word buildable from `letters`, grouped by length
///
/// One group is created per letter, so `letters` of length `n` always yields
/// `n` groups. Each group is sorted. Duplicate dictionary entries are kept.
///
/// # Examples
/// ```
/// use letter_words::solver::find_matches;
///
/// let dictionary = ["cat", "at", "a", "dog", "act"];
/// let groups = find_matches("cat", &dictionary);
///
/// assert_eq!(groups.group_count(), 3);
/// assert_eq!(groups.words_of_length(3), Some(&["act", "cat"][..]));
/// ```
#[must_use]
pub fn find_matches<'d, S>(letters: &str, dictionary: &'d [S]) -> LengthGroups<'d>
where
    S: AsRef<str> + Sync,
{
    let pool = LetterPool::new(letters);

    // Each check owns its working copy, so entries can be tested independently
    let matches: Vec<&'d str> = dictionary
        .par_iter()
        .map(AsRef::as_ref)
        .filter(|word| is_subset_word(&pool, word))
        .collect();

    LengthGroups::from_words(pool.len(), matches)
}

/// Find matches for `letters` and render them as the grouped text block
///
/// Never fails: letters that match nothing still produce one empty group per
/// letter, and empty `letters` produce no output at all.
///
/// # Examples
/// ```
/// use letter_words::solver::find_and_format;
///
/// let dictionary = ["cat", "at", "a", "dog", "act"];
/// let output = find_and_format("cat", &dictionary);
///
/// assert_eq!(output, b"\n1\na\n\n2\nat\n\n3\nact\ncat\n");
/// ```
#[must_use]
pub fn find_and_format<S>(letters: &str, dictionary: &[S]) -> Vec<u8>
where
    S: AsRef<str> + Sync,
{
    format_groups(&find_matches(letters, dictionary))
}
