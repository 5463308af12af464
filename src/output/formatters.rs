//! Text rendering of lookup results

use crate::core::LengthGroups;

/// Render groups as the plain-text result block
///
/// Each group becomes a blank line, its 1-indexed length, then one word per
/// line. Empty groups still get their header.
///
/// # Examples
/// ```
/// use letter_words::core::LengthGroups;
/// use letter_words::output::formatters::format_groups;
///
/// let groups = LengthGroups::from_words(2, ["at", "a"]);
/// assert_eq!(format_groups(&groups), b"\n1\na\n\n2\nat\n");
/// ```
#[must_use]
pub fn format_groups(groups: &LengthGroups<'_>) -> Vec<u8> {
    let mut out = String::with_capacity(groups.group_count() * 4);

    for (length, words) in groups.iter() {
        out.push('\n');
        out.push_str(&length.to_string());
        out.push('\n');
        for word in words {
            out.push_str(word);
            out.push('\n');
        }
    }

    out.into_bytes()
}

/// Create a bar string proportional to `value / max`
#[must_use]
pub fn create_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return " ".repeat(width);
    }
    let filled = (value * width / max).min(width);

    format!("{}{}", "█".repeat(filled), " ".repeat(width - filled))
}
