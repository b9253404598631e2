//! Round configuration.
//!
//! `RoundRules` controls how submissions are judged beyond the three core
//! checks. The defaults reproduce the permissive game: the root word itself
//! is a valid answer and there is no minimum length.

use serde::{Deserialize, Serialize};

/// Language tag used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Rules for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRules {
    /// Language tag passed to the dictionary.
    pub language: String,

    /// Minimum accepted word length in characters. `0` disables the check.
    pub min_word_length: usize,

    /// Whether the root word itself may be submitted.
    pub allow_root_word: bool,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            min_word_length: 0,
            allow_root_word: true,
        }
    }
}

impl RoundRules {
    /// Create the default (permissive) rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Reject words shorter than `min` characters.
    #[must_use]
    pub fn with_min_word_length(mut self, min: usize) -> Self {
        self.min_word_length = min;
        self
    }

    /// Reject the root word as an answer.
    #[must_use]
    pub fn reject_root_word(mut self) -> Self {
        self.allow_root_word = false;
        self
    }

    /// True if no stricter-than-default rule is active.
    #[must_use]
    pub fn is_permissive(&self) -> bool {
        self.min_word_length == 0 && self.allow_root_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let rules = RoundRules::default();
        assert_eq!(rules.language, "en");
        assert_eq!(rules.min_word_length, 0);
        assert!(rules.allow_root_word);
        assert!(rules.is_permissive());
    }

    #[test]
    fn test_builder() {
        let rules = RoundRules::new()
            .with_language("en_GB")
            .with_min_word_length(3)
            .reject_root_word();

        assert_eq!(rules.language, "en_GB");
        assert_eq!(rules.min_word_length, 3);
        assert!(!rules.allow_root_word);
        assert!(!rules.is_permissive());
    }

    #[test]
    fn test_serde() {
        let rules = RoundRules::new().with_min_word_length(4);
        let json = serde_json::to_string(&rules).unwrap();
        let back: RoundRules = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, back);
    }
}
