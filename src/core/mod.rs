//! Core domain types for the solver
//!
//! Fundamental types with no knowledge of terminals, files, or prompts.
//! Everything here is pure and testable in isolation.

mod feedback;
mod guess;
mod word;

pub use feedback::{FeedbackPattern, FeedbackSymbol, PatternError};
pub use guess::Guess;
pub use word::{Word, WordError};
