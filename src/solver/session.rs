//! Solver session state machine
//!
//! Drives one game through discrete inputs, with no knowledge of where the
//! inputs come from: record an observation, ask for a suggestion, resolve
//! the suggestion with feedback. The candidate set starts as the full
//! dictionary and only ever shrinks.

use super::{filter_candidates, select_next_guess};
use crate::core::{FeedbackPattern, Guess, Word};
use std::fmt;

/// Error type for solver turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Filtering produced zero candidates: the feedback sequence is
    /// self-contradictory or the hidden word is outside the dictionary.
    /// Terminal and user-reportable, not retryable.
    EmptyCandidateSet,
    /// No dictionary word eliminates any candidate. Expected only with one
    /// candidate left; with more it indicates a dictionary gap.
    NoImprovingGuess { remaining: usize },
    /// A suggestion is outstanding; feedback must arrive before another one.
    AwaitingFeedback,
    /// Feedback arrived with no suggestion outstanding.
    NoOutstandingGuess,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidateSet => write!(
                f,
                "no candidates remain: the feedback is contradictory or the \
                 hidden word is not in the dictionary"
            ),
            Self::NoImprovingGuess { remaining } => write!(
                f,
                "no dictionary word eliminates any of the {remaining} remaining candidates"
            ),
            Self::AwaitingFeedback => {
                write!(f, "a suggested guess is still awaiting feedback")
            }
            Self::NoOutstandingGuess => {
                write!(f, "feedback received but no guess is outstanding")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Where the session stands after an observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// More than one candidate remains; another guess is needed.
    Guessing { remaining: usize },
    /// Exactly one candidate remains: the answer.
    Solved(Word),
}

/// One game of the solver
///
/// Borrows the dictionary (always an explicit parameter, never ambient
/// state) and owns the shrinking candidate set. The first guess word is
/// chosen by the caller and fed in through [`Session::record`]; from then on
/// the session alternates [`Session::suggest`] and [`Session::feedback`]
/// until [`Status::Solved`].
pub struct Session<'a> {
    dictionary: &'a [Word],
    candidates: Vec<Word>,
    pending: Option<Word>,
    history: Vec<Guess>,
}

impl<'a> Session<'a> {
    /// Start a session over the full dictionary
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            candidates: dictionary.to_vec(),
            pending: None,
            history: Vec::new(),
        }
    }

    /// Words not yet ruled out, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Completed turns so far
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// The answer, once exactly one candidate remains
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Record a caller-chosen guess and its observed feedback
    ///
    /// This is how the opening turn enters the session (the solver never
    /// picks the first word), and it also lets a caller override a
    /// suggestion on any later turn.
    ///
    /// # Errors
    /// Returns [`SolveError::EmptyCandidateSet`] if no candidate survives
    /// the observation.
    pub fn record(&mut self, word: Word, pattern: FeedbackPattern) -> Result<Status, SolveError> {
        self.pending = None;
        let guess = Guess::new(word, pattern);
        let narrowed = filter_candidates(&self.candidates, &guess);

        if narrowed.is_empty() {
            return Err(SolveError::EmptyCandidateSet);
        }

        self.candidates = narrowed;
        self.history.push(guess);

        Ok(match self.candidates.as_slice() {
            [only] => Status::Solved(only.clone()),
            rest => Status::Guessing {
                remaining: rest.len(),
            },
        })
    }

    /// Suggest the next guess by min-max selection over the dictionary
    ///
    /// The suggestion is parked until [`Session::feedback`] resolves it.
    ///
    /// # Errors
    /// - [`SolveError::AwaitingFeedback`] if a suggestion is already
    ///   outstanding.
    /// - [`SolveError::NoImprovingGuess`] if no dictionary word has positive
    ///   worst-case elimination; with `remaining > 1` this signals a
    ///   dictionary or algorithm defect rather than a finished game.
    pub fn suggest(&mut self) -> Result<&'a Word, SolveError> {
        if self.pending.is_some() {
            return Err(SolveError::AwaitingFeedback);
        }

        let (word, _eliminated) = select_next_guess(&self.candidates, self.dictionary).ok_or(
            SolveError::NoImprovingGuess {
                remaining: self.candidates.len(),
            },
        )?;

        self.pending = Some(word.clone());
        Ok(word)
    }

    /// Resolve the outstanding suggestion with observed feedback
    ///
    /// # Errors
    /// - [`SolveError::NoOutstandingGuess`] if nothing is pending.
    /// - [`SolveError::EmptyCandidateSet`] if no candidate survives.
    pub fn feedback(&mut self, pattern: FeedbackPattern) -> Result<Status, SolveError> {
        let word = self.pending.take().ok_or(SolveError::NoOutstandingGuess)?;
        self.record(word, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    fn score(guess: &str, hidden: &str) -> FeedbackPattern {
        FeedbackPattern::evaluate(&word(guess), &word(hidden))
    }

    #[test]
    fn first_observation_narrows_the_dictionary() {
        let dictionary = words(&["crane", "trace", "slate", "rough"]);
        let mut session = Session::new(&dictionary);
        assert_eq!(session.candidates().len(), dictionary.len());

        let status = session.record(word("crane"), score("crane", "trace")).unwrap();
        assert_eq!(status, Status::Solved(word("trace")));
    }

    #[test]
    fn single_survivor_is_solved_without_another_suggestion() {
        let dictionary = words(&["crane", "slate"]);
        let mut session = Session::new(&dictionary);

        let status = session.record(word("crane"), score("crane", "slate")).unwrap();
        assert_eq!(status, Status::Solved(word("slate")));
        assert_eq!(session.solution(), Some(&word("slate")));
    }

    #[test]
    fn full_game_against_a_hidden_word() {
        let dictionary = words(&["slate", "irate", "crate", "grate", "trace", "rough"]);
        let hidden = word("grate");
        let mut session = Session::new(&dictionary);

        let mut status = session
            .record(word("rough"), score("rough", hidden.text()))
            .unwrap();

        let mut turns = 0;
        while let Status::Guessing { .. } = status {
            turns += 1;
            assert!(turns < 10, "solver failed to converge");
            let suggestion = session.suggest().unwrap().clone();
            let pattern = FeedbackPattern::evaluate(&suggestion, &hidden);
            status = session.feedback(pattern).unwrap();
        }

        assert_eq!(status, Status::Solved(hidden));
    }

    #[test]
    fn candidate_set_shrinks_monotonically() {
        let dictionary = words(&["slate", "irate", "crate", "grate", "trace"]);
        let hidden = word("irate");
        let mut session = Session::new(&dictionary);

        let mut previous = session.candidates().len();
        let mut status = session
            .record(word("slate"), score("slate", hidden.text()))
            .unwrap();

        while let Status::Guessing { remaining } = status {
            assert!(remaining <= previous);
            previous = remaining;
            let suggestion = session.suggest().unwrap().clone();
            let pattern = FeedbackPattern::evaluate(&suggestion, &hidden);
            status = session.feedback(pattern).unwrap();
        }
    }

    #[test]
    fn contradictory_feedback_reports_empty_candidate_set() {
        let dictionary = words(&["crane", "trace", "slate"]);
        let mut session = Session::new(&dictionary);

        // 'e' absent everywhere rules out every dictionary word
        let err = session
            .record(word("crane"), FeedbackPattern::parse("BBBBB").unwrap())
            .unwrap_err();
        assert_eq!(err, SolveError::EmptyCandidateSet);
    }

    #[test]
    fn same_word_absent_then_exact_is_contradictory() {
        let dictionary = words(&["crane", "trace", "slate", "grate", "irate"]);
        let mut session = Session::new(&dictionary);

        // First observation: every letter of 'irate' absent
        let result = session.record(word("irate"), FeedbackPattern::parse("BBBBB").unwrap());
        // No dictionary word avoids all of i/r/a/t/e, so this empties the
        // set immediately; a later all-exact claim could never be reached
        assert_eq!(result.unwrap_err(), SolveError::EmptyCandidateSet);
    }

    #[test]
    fn feedback_without_suggestion_is_rejected() {
        let dictionary = words(&["crane", "trace", "slate"]);
        let mut session = Session::new(&dictionary);

        let err = session
            .feedback(FeedbackPattern::parse("BBBBB").unwrap())
            .unwrap_err();
        assert_eq!(err, SolveError::NoOutstandingGuess);
    }

    #[test]
    fn second_suggestion_before_feedback_is_rejected() {
        let dictionary = words(&["slate", "irate", "crate", "grate"]);
        let mut session = Session::new(&dictionary);
        session
            .record(word("slate"), score("slate", "grate"))
            .unwrap();

        session.suggest().unwrap();
        assert_eq!(session.suggest().unwrap_err(), SolveError::AwaitingFeedback);
    }

    #[test]
    fn suggest_on_solved_session_reports_no_improving_guess() {
        let dictionary = words(&["crane", "slate"]);
        let mut session = Session::new(&dictionary);
        session.record(word("crane"), score("crane", "slate")).unwrap();

        assert_eq!(
            session.suggest().unwrap_err(),
            SolveError::NoImprovingGuess { remaining: 1 }
        );
    }

    #[test]
    fn caller_override_replaces_pending_suggestion() {
        let dictionary = words(&["slate", "irate", "crate", "grate"]);
        let mut session = Session::new(&dictionary);
        session
            .record(word("slate"), score("slate", "grate"))
            .unwrap();

        session.suggest().unwrap();
        // Caller plays a different word instead of the suggestion
        session
            .record(word("irate"), score("irate", "grate"))
            .unwrap();
        // The parked suggestion was discarded with it
        assert_eq!(
            session
                .feedback(FeedbackPattern::parse("BBBBB").unwrap())
                .unwrap_err(),
            SolveError::NoOutstandingGuess
        );
    }

    #[test]
    fn history_records_each_turn() {
        let dictionary = words(&["slate", "irate", "crate", "grate"]);
        let mut session = Session::new(&dictionary);
        session
            .record(word("slate"), score("slate", "grate"))
            .unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].word(), &word("slate"));
    }
}
