//! Colored summary reports for the terminal

use super::formatters::create_bar;
use crate::core::LengthGroups;
use colored::Colorize;
use std::time::Duration;

/// Counts describing one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub letters: String,
    pub dictionary_size: usize,
    pub total_matches: usize,
    pub non_empty_groups: usize,
    pub longest: Option<usize>,
    /// Matches per length, index 0 holding length 1
    pub per_length: Vec<usize>,
    pub duration: Duration,
}

impl MatchSummary {
    /// Summarize a lookup result
    #[must_use]
    pub fn from_groups(
        letters: &str,
        dictionary_size: usize,
        groups: &LengthGroups<'_>,
        duration: Duration,
    ) -> Self {
        let per_length: Vec<usize> = groups.iter().map(|(_, words)| words.len()).collect();

        Self {
            letters: letters.to_string(),
            dictionary_size,
            total_matches: groups.total_words(),
            non_empty_groups: per_length.iter().filter(|&&n| n > 0).count(),
            longest: groups.longest(),
            per_length,
            duration,
        }
    }
}

/// Print a lookup summary to stderr
///
/// Stdout is reserved for the result block.
pub fn print_summary(summary: &MatchSummary) {
    eprintln!("\n{}", "─".repeat(50).cyan());
    eprintln!(
        "Letters: {}",
        summary.letters.to_uppercase().bright_yellow().bold()
    );
    eprintln!("{}", "─".repeat(50).cyan());

    eprintln!("   Dictionary:   {} words", summary.dictionary_size);
    eprintln!(
        "   Matches:      {}",
        summary.total_matches.to_string().bright_green().bold()
    );
    eprintln!(
        "   Lengths used: {}/{}",
        summary.non_empty_groups,
        summary.per_length.len()
    );
    match summary.longest {
        Some(longest) => eprintln!("   Longest:      {longest} letters"),
        None => eprintln!("   Longest:      {}", "no matches".red()),
    }
    eprintln!("   Time taken:   {:.3}s", summary.duration.as_secs_f64());

    let max = summary.per_length.iter().copied().max().unwrap_or(0);
    if max > 0 {
        eprintln!("\n{}", "Distribution:".bright_cyan().bold());
        for (idx, &count) in summary.per_length.iter().enumerate() {
            let bar = create_bar(count, max, 30);
            eprintln!("   {:>2}: {} {count:5}", idx + 1, bar.green());
        }
    }
}
