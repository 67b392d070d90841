//! Word lists
//!
//! The embedded default dictionary plus a strict file loader for
//! user-supplied dictionaries.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
