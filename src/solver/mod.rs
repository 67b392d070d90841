//! Min-max solving machinery
//!
//! The consistency filter, the worst-case elimination analyzer, and the
//! session state machine that drives a game turn by turn.

mod elimination;
mod filter;
mod session;

pub use elimination::{select_next_guess, worst_case_elimination};
pub use filter::filter_candidates;
pub use session::{Session, SolveError, Status};
