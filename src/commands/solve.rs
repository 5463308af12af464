//! Letter lookup command
//!
//! Runs one lookup against the loaded dictionary for the CLI.

use crate::output::{MatchSummary, format_groups};
use crate::server::is_valid_letters;
use crate::solver::find_matches;
use crate::wordlists::Dictionary;
use std::time::Instant;

/// Result of a CLI lookup
pub struct SolveResult {
    /// The formatted result block, ready for stdout
    pub output: Vec<u8>,
    pub summary: MatchSummary,
}

/// Look up every word buildable from `input`
///
/// The input is lowercased first. Input outside the letters alphabet is still
/// matched, it just finds nothing useful; a warning is logged.
#[must_use]
pub fn solve_letters(input: &str, dictionary: &Dictionary) -> SolveResult {
    let letters = input.to_lowercase();
    if !is_valid_letters(&letters) {
        tracing::warn!(%letters, "input is not 1-50 letters from a-z, ä, ö, ü");
    }

    let start = Instant::now();
    let groups = find_matches(&letters, dictionary.words());
    let output = format_groups(&groups);
    let summary = MatchSummary::from_groups(&letters, dictionary.len(), &groups, start.elapsed());

    tracing::debug!(
        %letters,
        matches = summary.total_matches,
        elapsed_ms = summary.duration.as_secs_f64() * 1000.0,
        "lookup finished"
    );

    SolveResult { output, summary }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "at", "a", "dog", "act"])
    }

    #[test]
    fn solve_formats_groups() {
        let result = solve_letters("cat", &dictionary());
        assert_eq!(result.output, b"\n1\na\n\n2\nat\n\n3\nact\ncat\n");
        assert_eq!(result.summary.total_matches, 4);
        assert_eq!(result.summary.dictionary_size, 5);
    }

    #[test]
    fn solve_lowercases_input() {
        let upper = solve_letters("CAT", &dictionary());
        let lower = solve_letters("cat", &dictionary());
        assert_eq!(upper.output, lower.output);
        assert_eq!(upper.summary.letters, "cat");
    }

    #[test]
    fn solve_invalid_input_still_answers() {
        let result = solve_letters("c4t", &dictionary());
        assert_eq!(result.output, b"\n1\n\n2\n\n3\n");
        assert_eq!(result.summary.total_matches, 0);
    }
}
