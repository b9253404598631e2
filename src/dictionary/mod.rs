//! Dictionary capability used to decide whether a word is real.
//!
//! - `Dictionary`: the single-method contract the round engine calls
//! - `WordList`: a case-insensitive in-memory lexicon for one language

pub mod traits;
pub mod word_list;

pub use traits::Dictionary;
pub use word_list::{DictionaryError, WordList};
