//! Round state and submission handling.
//!
//! A `Round` holds the root word and the answers accepted so far. It has one
//! resting state (active, accepting submissions). `start_game` passes through
//! a transient reset that picks a new root word and clears the answers.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validation::{is_original, is_possible, is_real};
use crate::core::{RoundRng, RoundRules};
use crate::dictionary::Dictionary;
use crate::words::RootWordPool;

/// Why a submission was turned down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The word uses letters the root word does not have.
    NotPossible {
        /// Lowercased root word, for the message.
        root_word: String,
    },
    /// The word was already accepted this round.
    AlreadyUsed,
    /// The dictionary does not know the word.
    NotRecognized,
    /// Shorter than `RoundRules::min_word_length`.
    TooShort {
        /// Configured minimum length.
        min: usize,
    },
    /// The root word itself, with `RoundRules::allow_root_word` off.
    IsRootWord,
}

impl Rejection {
    /// Short heading for display.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::NotPossible { .. } => "Word not possible",
            Rejection::AlreadyUsed => "Word used already",
            Rejection::NotRecognized => "Word not recognised",
            Rejection::TooShort { .. } => "Word too short",
            Rejection::IsRootWord => "Word is the root word",
        }
    }

    /// Longer explanation for display.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Rejection::NotPossible { root_word } => {
                format!("You can't spell that word from {root_word}")
            }
            Rejection::AlreadyUsed => "Be more original!".to_string(),
            Rejection::NotRecognized => "You can't just make them up, you know!".to_string(),
            Rejection::TooShort { min } => format!("Words must be at least {min} letters long"),
            Rejection::IsRootWord => "You can't just use the word you were given!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Outcome of `Round::submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitResult {
    /// The answer was added to the front of the used words.
    Accepted,
    /// The answer was refused; the round is unchanged.
    Rejected(Rejection),
}

impl SubmitResult {
    /// Check if the answer was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitResult::Accepted)
    }

    /// The rejection, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            SubmitResult::Accepted => None,
            SubmitResult::Rejected(r) => Some(r),
        }
    }
}

impl From<Result<(), Rejection>> for SubmitResult {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => SubmitResult::Accepted,
            Err(r) => SubmitResult::Rejected(r),
        }
    }
}

/// Live state of one round.
///
/// ## Invariants
///
/// - `used_words` is most-recent-first and holds no two words that are
///   equal ignoring case.
/// - Every used word passed all checks against `root_word` when inserted.
///
/// ## Example
///
/// ```
/// use word_scramble::core::{RoundRng, RoundRules};
/// use word_scramble::dictionary::WordList;
/// use word_scramble::rules::{Rejection, Round, SubmitResult};
/// use word_scramble::words::RootWordPool;
///
/// let pool = RootWordPool::from_words(["banana"]).unwrap();
/// let dictionary = WordList::from_words("en", ["ban", "nab"]);
/// let mut rng = RoundRng::new(1);
///
/// let mut round = Round::start(&pool, &mut rng, RoundRules::default());
/// assert_eq!(round.root_word(), "banana");
///
/// assert_eq!(round.submit("ban", &dictionary), SubmitResult::Accepted);
/// assert_eq!(round.submit("ban", &dictionary), SubmitResult::Rejected(Rejection::AlreadyUsed));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    root_word: String,
    used_words: Vector<String>,
    rules: RoundRules,
}

impl Round {
    /// Start a round with a root word drawn from `pool`.
    #[must_use]
    pub fn start(pool: &RootWordPool, rng: &mut RoundRng, rules: RoundRules) -> Self {
        let mut round = Self::with_root_word(String::new(), rules);
        round.start_game(pool, rng);
        round
    }

    /// Create a round with a fixed root word.
    ///
    /// An empty root word is allowed here but the round then refuses every
    /// submission.
    #[must_use]
    pub fn with_root_word(root_word: impl Into<String>, rules: RoundRules) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vector::new(),
            rules,
        }
    }

    /// Reset: pick a new root word uniformly from `pool` and clear answers.
    pub fn start_game(&mut self, pool: &RootWordPool, rng: &mut RoundRng) {
        self.root_word = pool.choose(rng).to_string();
        self.used_words.clear();
        debug!(root_word = %self.root_word, "round started");
    }

    /// Root word as it appeared in the pool.
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted answers, most recent first, in their submitted casing.
    pub fn used_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.used_words.iter().map(String::as_str)
    }

    /// Number of accepted answers.
    #[must_use]
    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Rules in effect.
    #[must_use]
    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    /// Run all checks on `answer` without changing the round.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// possible, original, then real. Opt-in rules from `RoundRules` run
    /// just before the dictionary lookup.
    pub fn check<D>(&self, answer: &str, dictionary: &D) -> Result<(), Rejection>
    where
        D: Dictionary + ?Sized,
    {
        let root = self.root_word.to_lowercase();
        let word = answer.to_lowercase();

        if root.is_empty() || !is_possible(&word, &root) {
            return Err(Rejection::NotPossible { root_word: root });
        }

        if !is_original(&word, self.used_words()) {
            return Err(Rejection::AlreadyUsed);
        }

        if !self.rules.allow_root_word && word == root {
            return Err(Rejection::IsRootWord);
        }

        let min = self.rules.min_word_length;
        if word.chars().count() < min {
            return Err(Rejection::TooShort { min });
        }

        if !is_real(&word, dictionary, &self.rules.language) {
            return Err(Rejection::NotRecognized);
        }

        Ok(())
    }

    /// Submit an answer.
    ///
    /// On success the answer, in its original casing, is inserted at the
    /// front of the used words. On rejection nothing changes.
    pub fn submit<D>(&mut self, answer: &str, dictionary: &D) -> SubmitResult
    where
        D: Dictionary + ?Sized,
    {
        let result = self.check(answer, dictionary);

        match &result {
            Ok(()) => {
                self.used_words.push_front(answer.to_string());
                debug!(answer, count = self.used_words.len(), "answer accepted");
            }
            Err(rejection) => {
                debug!(answer, reason = rejection.title(), "answer rejected");
            }
        }

        result.into()
    }
}
