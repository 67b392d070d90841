//! Consistency filtering of candidate sets
//!
//! A candidate survives a guess iff it could have been the hidden word that
//! produced the observed feedback.

use crate::core::{Guess, Word};

/// Filter a candidate set down to the words consistent with a guess
///
/// Returns the subset of `candidates` admitted by `guess`, preserving the
/// relative order of survivors so downstream output stays deterministic.
/// The result is always a subset; filtering never adds members.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{FeedbackPattern, Guess, Word};
/// use wordle_minimax::solver::filter_candidates;
///
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crane").unwrap(),
///     Word::new("trace").unwrap(),
/// ];
/// let guess = Guess::new(
///     Word::new("crane").unwrap(),
///     FeedbackPattern::parse("YGGBG").unwrap(),
/// );
///
/// let remaining = filter_candidates(&candidates, &guess);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "trace");
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Guess) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| guess.admits(candidate))
        .cloned()
        .collect()
}
