//! In-memory lexicon for a single language.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::info;

use super::traits::Dictionary;

/// Errors from loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be read.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// The word list contained no words.
    #[error("dictionary is empty")]
    Empty,
}

/// A set of correctly spelled words in one language.
///
/// Entries are stored lowercase and lookups are case-insensitive. Queries
/// for any other language are never valid.
///
/// ## Example
///
/// ```
/// use word_scramble::dictionary::{Dictionary, WordList};
///
/// let words = WordList::from_words("en", ["ban", "nab", "Anna"]);
///
/// assert!(words.is_valid_spelling("anna", "en"));
/// assert!(!words.is_valid_spelling("bna", "en"));
/// assert!(!words.is_valid_spelling("ban", "fr"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordList {
    language: String,
    words: FxHashSet<String>,
}

impl WordList {
    /// Create an empty word list for `language`.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            words: FxHashSet::default(),
        }
    }

    /// Build from an iterator of words.
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new(language);
        list.extend(words);
        list
    }

    /// Parse newline-delimited text, one word per line.
    pub fn from_text(language: impl Into<String>, text: &str) -> Result<Self, DictionaryError> {
        let list = Self::from_words(language, text.lines());
        if list.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(list)
    }

    /// Load a newline-delimited word file such as `/usr/share/dict/words`.
    pub fn from_path(language: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let list = Self::from_text(language, &text)?;
        info!(path = %path.display(), language = %list.language, words = list.len(), "loaded dictionary");
        Ok(list)
    }

    /// Add a single word. Blank input is ignored.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Add several words.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Language tag of this list.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Check membership, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_spelling(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.contains(word)
    }
}
