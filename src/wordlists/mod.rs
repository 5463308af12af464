//! Dictionaries of candidate words
//!
//! A dictionary is loaded once at startup and only read afterwards, so it can
//! be shared across threads without locking.

pub mod loader;

use loader::normalize_line;
pub use loader::{DictionaryError, load_from_file};

/// Ordered, read-only list of normalized candidate words
///
/// Duplicate entries are preserved in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries get the same normalization as lines read from a file.
    ///
    /// # Examples
    /// ```
    /// use letter_words::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Cat", "", "dog\r\n"]);
    /// assert_eq!(dictionary.words(), ["cat", "dog"]);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| normalize_line(entry.as_ref()))
            .collect();

        Self { words }
    }

    /// The words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of entries, counting duplicates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
