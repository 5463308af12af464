//! Word lookup algorithms
//!
//! The matcher decides a single word; the engine runs it over a dictionary.

mod engine;
pub mod matcher;

pub use engine::{find_and_format, find_matches};
pub use matcher::is_subset_word;
