//! The three submission checks.
//!
//! Each check is a pure function over lowercase input. `Round::submit` runs
//! them in order: possible, original, real.

use smallvec::SmallVec;

use crate::dictionary::Dictionary;

/// Letters of a root word; most root words fit inline.
type LetterPool = SmallVec<[char; 16]>;

/// Can `word` be spelled from the letters of `root_word`?
///
/// Each letter of `word` consumes the first matching letter still left in
/// the root, so repeated letters are limited by how often they appear.
/// Letters compare exactly; callers lowercase both sides first.
///
/// ```
/// use word_scramble::rules::is_possible;
///
/// assert!(is_possible("ban", "banana"));
/// assert!(is_possible("nana", "banana"));
/// assert!(!is_possible("bb", "banana"));
/// assert!(!is_possible("xyz", "banana"));
/// ```
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut letters: LetterPool = root_word.chars().collect();

    for letter in word.chars() {
        match letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                letters.remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Has `word` not been accepted yet?
///
/// Comparison ignores the casing the earlier answers were stored with.
#[must_use]
pub fn is_original<'a, I>(word: &str, used_words: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    !used_words.into_iter().any(|used| used.to_lowercase() == word)
}

/// Is `word` correctly spelled in `language`?
#[must_use]
pub fn is_real<D>(word: &str, dictionary: &D, language: &str) -> bool
where
    D: Dictionary + ?Sized,
{
    dictionary.is_valid_spelling(word, language)
}
