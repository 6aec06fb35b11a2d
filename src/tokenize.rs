//! Review text normalization and word splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::stopwords::StopWords;

/// Tokens must be longer than this many characters.
pub const MIN_TOKEN_EXCLUSIVE_LEN: usize = 2;

// Anything that is neither a Unicode word character nor whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern compiles"));

/// Something that may hold the text of one review.
///
/// Implemented for `str`, `String`, references to them and `Option`s of
/// them, so callers can pass `&[&str]`, `Vec<String>` or
/// `Vec<Option<String>>` as a document set. `None` is a review without text.
pub trait ReviewText {
    fn review_text(&self) -> Option<&str>;
}

impl ReviewText for str {
    fn review_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl ReviewText for String {
    fn review_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ReviewText + ?Sized> ReviewText for &T {
    fn review_text(&self) -> Option<&str> {
        (**self).review_text()
    }
}

impl<T: ReviewText> ReviewText for Option<T> {
    fn review_text(&self) -> Option<&str> {
        self.as_ref().and_then(|t| t.review_text())
    }
}

/// Splits review text into lowercase word tokens.
///
/// Every non-word, non-whitespace character becomes a space, then the text is
/// split on whitespace. Tokens of two characters or fewer and stop-words are
/// dropped. Missing or empty text gives an empty vector.
/// # Example
/// ```
/// use review_phrases::{StopWords, tokenize};
/// let tokens = tokenize(Some("Amazing fried chicken! Crispy skin."), StopWords::default_set());
/// assert_eq!(tokens, vec!["amazing", "fried", "chicken", "crispy", "skin"]);
/// assert!(tokenize(None, StopWords::default_set()).is_empty());
/// ```
pub fn tokenize(text: Option<&str>, stop_words: &StopWords) -> Vec<String> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_EXCLUSIVE_LEN)
        .filter(|word| !stop_words.contains(word))
        .map(String::from)
        .collect()
}

/// Tokenizes every document of a set, keeping zero-token documents in place.
pub fn tokenize_all<D: ReviewText>(documents: &[D], stop_words: &StopWords) -> Vec<Vec<String>> {
    documents
        .iter()
        .map(|doc| tokenize(doc.review_text(), stop_words))
        .collect()
}
