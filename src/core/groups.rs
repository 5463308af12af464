//! Matched words grouped by length
//!
//! Group `i` (zero-indexed) holds the words of length `i + 1`. A pool of `n`
//! letters always has exactly `n` groups, empty or not.

/// Words partitioned by length, one group per possible word length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthGroups<'a> {
    groups: Vec<Vec<&'a str>>,
}

impl<'a> LengthGroups<'a> {
    /// Create `group_count` empty groups
    #[must_use]
    pub fn new(group_count: usize) -> Self {
        Self {
            groups: vec![Vec::new(); group_count],
        }
    }

    /// Build groups from matched words and sort each group
    #[must_use]
    pub fn from_words<I>(group_count: usize, words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut groups = Self::new(group_count);
        for word in words {
            groups.insert(word);
        }
        groups.sort();
        groups
    }

    /// Place a word in the group for its length
    ///
    /// Returns false and drops the word when it is empty or longer than the
    /// number of groups.
    pub fn insert(&mut self, word: &'a str) -> bool {
        let len = word.chars().count();
        match len.checked_sub(1).and_then(|idx| self.groups.get_mut(idx)) {
            Some(group) => {
                group.push(word);
                true
            }
            None => false,
        }
    }

    /// Sort every group in ascending codepoint order
    pub fn sort(&mut self) {
        for group in &mut self.groups {
            group.sort_unstable();
        }
    }

    /// Number of groups (the pool size)
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Words of the given length (1-indexed), if that length has a group
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Option<&[&'a str]> {
        length
            .checked_sub(1)
            .and_then(|idx| self.groups.get(idx))
            .map(Vec::as_slice)
    }

    /// Iterate over `(length, words)` pairs in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[&'a str])> {
        self.groups
            .iter()
            .enumerate()
            .map(|(idx, group)| (idx + 1, group.as_slice()))
    }

    /// Total number of words across all groups
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Length of the longest matched word, if any word matched
    #[must_use]
    pub fn longest(&self) -> Option<usize> {
        self.groups
            .iter()
            .rposition(|group| !group.is_empty())
            .map(|idx| idx + 1)
    }
}
