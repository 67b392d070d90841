//! Feedback pattern calculation and representation
//!
//! A pattern encodes the per-position coloring of a guess using base-3
//! encoding:
//! - 0 = B, absent (letter not in the hidden word)
//! - 1 = Y, misplaced (letter in the hidden word, wrong position)
//! - 2 = G, exact (letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where position i
//! contributes digit × 3^i to the total. Two patterns are equal iff all five
//! positions match, which the compact encoding gives for free.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
///
/// The derived order (Absent < Misplaced < Exact) is used only for display
/// and sorting, never for comparison logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedbackSymbol {
    /// `B` - letter not present in the hidden word
    Absent,
    /// `Y` - letter present, but in the wrong position
    Misplaced,
    /// `G` - letter present and in the correct position
    Exact,
}

impl FeedbackSymbol {
    /// The character this symbol uses in the textual encoding
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Absent => 'B',
            Self::Misplaced => 'Y',
            Self::Exact => 'G',
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Misplaced,
            _ => Self::Absent,
        }
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "feedback must be exactly 5 characters, got {len}")
            }
            Self::InvalidSymbol(c) => {
                write!(f, "feedback character {c:?} is not one of 'B', 'Y', 'G'")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Feedback pattern for one guess
///
/// An ordered sequence of five [`FeedbackSymbol`] values, one per guess
/// position, packed into a single byte. Value range: 0-242 (3^5 patterns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// All exact (the guess is the hidden word)
    pub const SOLVED: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Get the raw base-3 value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether every position is exact
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.0 == Self::SOLVED.0
    }

    /// Build a pattern from five symbols in guess-position order
    #[must_use]
    pub fn from_symbols(symbols: [FeedbackSymbol; 5]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            value += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Unpack the pattern into five symbols in guess-position order
    #[must_use]
    pub fn symbols(self) -> [FeedbackSymbol; 5] {
        let mut value = self.0;
        let mut symbols = [FeedbackSymbol::Absent; 5];
        for symbol in &mut symbols {
            *symbol = FeedbackSymbol::from_digit(value % 3);
            value /= 3;
        }
        symbols
    }

    /// Score a guess word against a hidden word
    ///
    /// Implements the standard duplicate-letter-correct rules: each hidden
    /// letter instance satisfies at most one guess letter, exact matches
    /// first, then misplaced matches assigned in increasing guess-position
    /// order. Deterministic, and not symmetric in its arguments.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{FeedbackPattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let hidden = Word::new("slate").unwrap();
    /// let pattern = FeedbackPattern::evaluate(&guess, &hidden);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// assert_eq!(format!("{pattern}"), "BBGBG");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, hidden: &Word) -> Self {
        let guess = guess.letters();
        let hidden = hidden.letters();

        let mut symbols = [FeedbackSymbol::Absent; 5];
        // Unconsumed hidden letters, indexed a-z; Word guarantees the range
        let mut remaining = [0u8; 26];

        // First pass: exact matches consume their hidden position
        for i in 0..5 {
            if guess[i] == hidden[i] {
                symbols[i] = FeedbackSymbol::Exact;
            } else {
                remaining[usize::from(hidden[i] - b'a')] += 1;
            }
        }

        // Second pass: misplaced matches, lowest guess position first
        for i in 0..5 {
            if symbols[i] == FeedbackSymbol::Absent {
                let count = &mut remaining[usize::from(guess[i] - b'a')];
                if *count > 0 {
                    symbols[i] = FeedbackSymbol::Misplaced;
                    *count -= 1;
                }
            }
        }

        Self::from_symbols(symbols)
    }

    /// Parse a pattern from its textual encoding, e.g. `"BBYGY"`
    ///
    /// Exactly five characters, each one of `B` (absent), `Y` (misplaced),
    /// `G` (exact). Anything else fails fast with a descriptive error;
    /// collaborators normalize case before calling.
    ///
    /// # Errors
    /// Returns `PatternError` on a wrong length or an out-of-alphabet
    /// character.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::FeedbackPattern;
    ///
    /// let pattern = FeedbackPattern::parse("GGGGG").unwrap();
    /// assert!(pattern.is_solved());
    ///
    /// assert!(FeedbackPattern::parse("GYXGY").is_err());
    /// assert!(FeedbackPattern::parse("GYG").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let length = s.chars().count();
        if length != 5 {
            return Err(PatternError::InvalidLength(length));
        }

        let mut symbols = [FeedbackSymbol::Absent; 5];
        for (symbol, c) in symbols.iter_mut().zip(s.chars()) {
            *symbol = match c {
                'B' => FeedbackSymbol::Absent,
                'Y' => FeedbackSymbol::Misplaced,
                'G' => FeedbackSymbol::Exact,
                other => return Err(PatternError::InvalidSymbol(other)),
            };
        }

        Ok(Self::from_symbols(symbols))
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
