//! # word-scramble
//!
//! Round engine for an anagram-style word game.
//!
//! A round picks a root word at random. The player then submits words that
//! must be:
//!
//! 1. **Possible**: spellable from the root word's letters, each letter used
//!    at most as often as it appears in the root.
//! 2. **Original**: not already accepted this round (case-insensitive).
//! 3. **Real**: known to a dictionary in the configured language.
//!
//! Checks run in that order and stop at the first failure.
//!
//! ## Architecture
//!
//! - **Explicit state**: a `Round` value is owned by whatever drives the
//!   game. Nothing is global.
//! - **Pluggable dictionary**: spelling goes through the `Dictionary`
//!   trait, so any lexicon can back the game.
//! - **Deterministic RNG**: root words are picked with a seedable ChaCha8
//!   RNG, so a seed replays the same rounds.
//!
//! ## Modules
//!
//! - `core`: RNG and round configuration
//! - `words`: Root word pool and loader with fallback
//! - `dictionary`: Spell-check trait and an in-memory word list
//! - `rules`: Submission checks and round state

pub mod core;
pub mod words;
pub mod dictionary;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{RoundRng, RoundRngState, RoundRules, DEFAULT_LANGUAGE};

pub use crate::words::{RootWordPool, WordSourceError, DEFAULT_ROOT_WORD};

pub use crate::dictionary::{Dictionary, DictionaryError, WordList};

pub use crate::rules::{is_original, is_possible, is_real, Rejection, Round, SubmitResult};
