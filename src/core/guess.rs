//! A completed turn: a guess word paired with its observed feedback

use super::{FeedbackPattern, Word};
use std::fmt;

/// One completed turn of the game
///
/// Immutable record of a guess word and the feedback pattern observed for it
/// against the (unknown) hidden word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    pattern: FeedbackPattern,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, pattern: FeedbackPattern) -> Self {
        Self { word, pattern }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> FeedbackPattern {
        self.pattern
    }

    /// Check whether a candidate word could have produced this observation
    ///
    /// True iff scoring this guess's word against `candidate` as the hidden
    /// word reproduces the observed pattern exactly.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{FeedbackPattern, Guess, Word};
    ///
    /// let guess = Guess::new(
    ///     Word::new("crane").unwrap(),
    ///     FeedbackPattern::parse("BBGBG").unwrap(),
    /// );
    /// assert!(guess.admits(&Word::new("slate").unwrap()));
    /// assert!(!guess.admits(&Word::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        FeedbackPattern::evaluate(&self.word, candidate) == self.pattern
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.pattern)
    }
}
