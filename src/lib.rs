//! Wordle Min-Max Solver
//!
//! Solves the five-letter word-guessing game by maintaining the set of
//! dictionary words consistent with all observed feedback and choosing, on
//! each turn, the guess whose worst-case outcome eliminates the most
//! remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{FeedbackPattern, Word};
//! use wordle_minimax::solver::{Session, Status};
//!
//! let dictionary = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("trace").unwrap(),
//!     Word::new("slate").unwrap(),
//! ];
//!
//! let mut session = Session::new(&dictionary);
//! let observed = FeedbackPattern::evaluate(
//!     &Word::new("crane").unwrap(),
//!     &Word::new("trace").unwrap(),
//! );
//! let status = session.record(Word::new("crane").unwrap(), observed).unwrap();
//! assert!(matches!(status, Status::Solved(answer) if answer.text() == "trace"));
//! ```

// Core domain types
pub mod core;

// Consistency filtering, elimination analysis, session state machine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
