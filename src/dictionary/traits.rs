//! The spell-check contract the round engine depends on.

/// A spell-check capability.
///
/// The round engine only asks whether a word is correctly spelled in a
/// language, so any backend (a bundled word list, a system dictionary, a
/// remote service behind a cache) can sit behind this trait.
///
/// Closures implement it directly:
///
/// ```
/// use word_scramble::dictionary::Dictionary;
///
/// let only_ban = |word: &str, _language: &str| word == "ban";
/// assert!(only_ban.is_valid_spelling("ban", "en"));
/// assert!(!only_ban.is_valid_spelling("nab", "en"));
/// ```
pub trait Dictionary {
    /// Return true if `word` is correctly spelled in `language`.
    ///
    /// `word` is already lowercase when called from the round engine.
    fn is_valid_spelling(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_spelling(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}
