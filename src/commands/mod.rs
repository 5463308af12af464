//! Command implementations

pub mod serve;
pub mod solve;

pub use serve::run_serve;
pub use solve::{SolveResult, solve_letters};
