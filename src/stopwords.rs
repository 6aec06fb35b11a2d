//! Stop-word configuration.
//!
//! The default English list is built once per process and shared by
//! reference. Extra words (e.g. from a `--stopwords` file) produce a new,
//! equally immutable set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{PhraseError, Result};

/// Common English function words excluded from scoring.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would", "should", "could", "may",
    "might", "can", "i", "you", "he", "she", "it", "we", "they", "them", "their", "this", "that",
    "these", "those", "my", "your", "his", "her", "its", "our", "as", "if", "so", "than", "such",
    "no", "not", "very", "just",
];

static DEFAULT_SET: LazyLock<StopWords> = LazyLock::new(StopWords::english);

/// An immutable set of lowercase stop-words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The process-wide default English set.
    pub fn default_set() -> &'static StopWords {
        &DEFAULT_SET
    }

    /// A fresh copy of the default English list.
    pub fn english() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// No stop-words at all; only the length filter applies.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Returns a new set with `extra` merged in.
    pub fn with_words<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(Self::from_words(extra).words);
        Self { words }
    }

    /// Default English list plus the words in `path` (one per line, `#` starts a comment line).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PhraseError::io(path, e))?;
        let extra = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        let set = Self::english().with_words(extra);
        log::debug!(
            "loaded stop-words from {} ({} total)",
            path.display(),
            set.len()
        );
        Ok(set)
    }

    /// `word` is expected to be lowercased already.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
