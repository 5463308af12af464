//! Word list loading utilities
//!
//! Reads one word per line from a text file and normalizes each entry.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a dictionary from a file
///
/// Lines are stripped of their terminator (`\n` or `\r\n`) and surrounding
/// whitespace, lowercased, and blank lines are skipped. A final line without a
/// terminator is kept. Files that are not valid UTF-8 are read as ISO-8859-1.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use letter_words::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("german.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = decode(bytes).unwrap_or_else(|latin1| {
        tracing::warn!(
            path = %path.display(),
            "dictionary is not valid UTF-8, decoding as ISO-8859-1"
        );
        latin1
    });

    let dictionary = Dictionary::from_words(content.lines());
    tracing::info!(
        path = %path.display(),
        words = dictionary.len(),
        "dictionary loaded"
    );

    Ok(dictionary)
}

/// Decode file contents as UTF-8, or as ISO-8859-1 in the `Err` branch
///
/// A leading UTF-8 byte-order mark is dropped. Every byte is a valid
/// ISO-8859-1 code point, so the fallback cannot fail.
fn decode(bytes: Vec<u8>) -> Result<String, String> {
    match String::from_utf8(bytes) {
        Ok(text) => match text.strip_prefix('\u{feff}') {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(text),
        },
        Err(err) => Err(err
            .into_bytes()
            .iter()
            .map(|&byte| char::from(byte))
            .collect()),
    }
}

/// Normalize one raw dictionary line
///
/// Returns `None` for lines that are blank once trimmed.
#[must_use]
pub fn normalize_line(line: &str) -> Option<String> {
    let trimmed = line.trim_end_matches(['\n', '\r']).trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
