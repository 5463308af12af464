//! Output formatting
//!
//! The plain result block written to stdout and HTTP bodies, plus the colored
//! summary report.

pub mod display;
pub mod formatters;

pub use display::{MatchSummary, print_summary};
pub use formatters::format_groups;
