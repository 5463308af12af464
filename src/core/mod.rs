//! Core domain types for letter matching
//!
//! Pure value types with no I/O: the letter pool a word is built from and the
//! length-grouped result of a lookup.

mod groups;
mod pool;

pub use groups::LengthGroups;
pub use pool::LetterPool;
