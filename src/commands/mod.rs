//! Command implementations

pub mod interactive;
pub mod solve;

pub use interactive::run_interactive;
pub use solve::{SolveOptions, SolveResult, TurnRecord, solve_word};
