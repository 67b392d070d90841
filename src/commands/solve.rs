//! Self-play against a known target
//!
//! Runs the solver with feedback scored automatically against the target,
//! recording the path turn by turn.

use crate::core::{FeedbackPattern, Word};
use crate::solver::{Session, SolveError, Status, select_next_guess, worst_case_elimination};

/// Options for a self-play run
pub struct SolveOptions {
    pub target: Word,
    /// Opening guess; selected by min-max over the full dictionary when
    /// absent (the interactive mode instead asks the user for one).
    pub first_guess: Option<Word>,
    pub max_guesses: usize,
}

impl SolveOptions {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            first_guess: None,
            max_guesses: 6,
        }
    }
}

/// One turn of a self-play run
#[derive(Debug)]
pub struct TurnRecord {
    pub word: Word,
    pub pattern: FeedbackPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub guaranteed_eliminations: usize,
}

/// Outcome of a self-play run
#[derive(Debug)]
pub struct SolveResult {
    pub target: Word,
    pub turns: Vec<TurnRecord>,
    pub solved: bool,
}

/// Solve a known target word over the given dictionary
///
/// # Errors
/// Returns `SolveError` if the candidate set empties (the target is not in
/// the dictionary) or selection finds no improving guess with multiple
/// candidates left.
pub fn solve_word(options: &SolveOptions, dictionary: &[Word]) -> Result<SolveResult, SolveError> {
    let mut session = Session::new(dictionary);
    let mut turns = Vec::new();

    let opening = match &options.first_guess {
        Some(word) => word.clone(),
        None => {
            let (word, _) = select_next_guess(session.candidates(), dictionary).ok_or(
                SolveError::NoImprovingGuess {
                    remaining: session.candidates().len(),
                },
            )?;
            word.clone()
        }
    };

    let mut next = opening;
    loop {
        let candidates_before = session.candidates().len();
        let guaranteed_eliminations = worst_case_elimination(session.candidates(), &next);
        let pattern = FeedbackPattern::evaluate(&next, &options.target);

        let status = session.record(next.clone(), pattern)?;
        turns.push(TurnRecord {
            word: next.clone(),
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            guaranteed_eliminations,
        });

        if pattern.is_solved() {
            return Ok(SolveResult {
                target: options.target.clone(),
                turns,
                solved: true,
            });
        }

        match status {
            Status::Solved(answer) => {
                // One candidate left; play it out so the path ends on the
                // answer itself
                next = answer;
            }
            Status::Guessing { .. } => {
                if turns.len() >= options.max_guesses {
                    return Ok(SolveResult {
                        target: options.target.clone(),
                        turns,
                        solved: false,
                    });
                }
                // record() on the next iteration resolves the suggestion
                next = session.suggest()?.clone();
            }
        }
    }
}
