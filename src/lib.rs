//! Letter Words
//!
//! Finds every dictionary word that can be spelled from a pool of letters,
//! each letter used at most as often as it appears. Results are grouped by
//! word length and served from the command line or over HTTP.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_words::solver::find_and_format;
//!
//! let dictionary = ["cat", "at", "a", "dog", "act"];
//! let output = find_and_format("cat", &dictionary);
//!
//! assert_eq!(output, b"\n1\na\n\n2\nat\n\n3\nact\ncat\n");
//! ```

// Core domain types
pub mod core;

// Matching algorithms
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Result formatting
pub mod output;

// HTTP endpoint
pub mod server;

// Tracing setup
pub mod log;
