//! Root word pool and its loader.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::RoundRng;

/// Root word used when no other word is available.
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Errors from reading a root word resource.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    /// The resource could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// The resource contained no words.
    #[error("word list is empty")]
    Empty,
}

/// Candidate root words for a session.
///
/// Never empty: every constructor either yields at least one word or
/// returns an error. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootWordPool {
    words: Vec<String>,
}

impl Default for RootWordPool {
    fn default() -> Self {
        Self {
            words: vec![DEFAULT_ROOT_WORD.to_string()],
        }
    }
}

impl RootWordPool {
    /// Parse newline-delimited text.
    ///
    /// Lines are trimmed and blank lines skipped, so `\r\n` files and a
    /// trailing newline do not produce empty root words.
    pub fn from_text(text: &str) -> Result<Self, WordSourceError> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(WordSourceError::Empty);
        }
        Ok(Self { words })
    }

    /// Build a pool from an explicit list, or `None` if it has no usable word.
    pub fn from_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::<String>::into)
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        (!words.is_empty()).then_some(Self { words })
    }

    /// Read a pool from a file.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_text(&text)
    }

    /// Read a pool from a file, falling back to the default word.
    ///
    /// Never fails: a missing, unreadable or empty file yields
    /// `[DEFAULT_ROOT_WORD]`.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(pool) => {
                info!(path = %path.display(), words = pool.len(), "loaded root words");
                pool
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "falling back to default root word {DEFAULT_ROOT_WORD:?}"
                );
                Self::default()
            }
        }
    }

    /// Pick a root word uniformly at random.
    pub fn choose(&self, rng: &mut RoundRng) -> &str {
        rng.choose(&self.words)
            .map(String::as_str)
            .unwrap_or(DEFAULT_ROOT_WORD)
    }

    /// Number of candidate words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` is in the pool.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Iterate over the words in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
