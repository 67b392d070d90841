//! Dictionary loading
//!
//! Ingestion is strict: a malformed word fails the whole load with its line
//! number rather than being silently skipped, so dictionary defects surface
//! immediately instead of as wrong solver output.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary ingestion
#[derive(Debug)]
pub enum WordlistError {
    Io(io::Error),
    MalformedWord { line: usize, source: WordError },
    Empty,
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
            Self::MalformedWord { line, source } => {
                write!(f, "malformed word on line {line}: {source}")
            }
            Self::Empty => write!(f, "word list contains no words"),
        }
    }
}

impl std::error::Error for WordlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::MalformedWord { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for WordlistError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load a dictionary from a file, one word per line
///
/// Blank lines are skipped; anything else must be a valid five-letter word.
///
/// # Errors
/// Returns `WordlistError` on I/O failure, on the first malformed word
/// (with its line number), or if the file yields no words at all.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordlistError> {
    let content = fs::read_to_string(path)?;
    parse_words(content.lines())
}

/// Convert the embedded word list into `Word` values
///
/// # Errors
/// Returns `WordlistError` if the list contains a malformed entry; the
/// build script validates `data/words.txt`, so this only fires on a
/// hand-edited generated file.
pub fn builtin() -> Result<Vec<Word>, WordlistError> {
    parse_words(crate::wordlists::WORDS.iter().copied())
}

fn parse_words<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Vec<Word>, WordlistError> {
    let mut words = Vec::new();

    for (index, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| WordlistError::MalformedWord {
            line: index + 1,
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(WordlistError::Empty);
    }

    Ok(words)
}
