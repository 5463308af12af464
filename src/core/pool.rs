//! Letter pool representation
//!
//! A `LetterPool` is the multiset of characters a word may be built from.

use rustc_hash::FxHashMap;

/// Multiset of characters with per-character counts
///
/// Built fresh from an input string for each lookup. Callers only ever see it
/// through shared references; the matcher works on a private copy of the counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
    len: usize,
}

impl LetterPool {
    /// Build a pool from a string of letters
    ///
    /// No normalization happens here; callers lowercase before building.
    ///
    /// # Examples
    /// ```
    /// use letter_words::core::LetterPool;
    ///
    /// let pool = LetterPool::new("aab");
    /// assert_eq!(pool.len(), 3);
    /// assert_eq!(pool.count_of('a'), 2);
    /// assert_eq!(pool.count_of('z'), 0);
    /// ```
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut len = 0;
        for ch in letters.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }

        Self { counts, len }
    }

    /// Number of letters in the pool, counting duplicates
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the pool holds no letters
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many times a character occurs in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, ch: char) -> u32 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Fresh copy of the counts for a single consuming match
    #[inline]
    pub(crate) fn working_copy(&self) -> FxHashMap<char, u32> {
        self.counts.clone()
    }
}
