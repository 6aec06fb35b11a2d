#![forbid(unsafe_code)]
//! # review_phrases
//!
//! Key-phrase extraction for restaurant reviews. Each location's reviews are
//! summarized into a short list of representative phrases: the most repeated
//! two-word combinations, followed by single words ranked by TF-IDF
//! (term frequency times inverse document frequency) so that words used by
//! every reviewer sink and locally distinctive words rise.
//!
//! ## Example
//! ```
//! use review_phrases::extract_significant_phrases_with_ngrams;
//! let reviews = [
//!     "Amazing fried chicken! Crispy skin, juicy meat.",
//!     "Best chicken in Chicago! The mild sauce is incredible.",
//!     "Love their chicken wings and coleslaw.",
//! ];
//! let phrases = extract_significant_phrases_with_ngrams(&reviews, 5).unwrap();
//! assert!(phrases.len() <= 5);
//! assert!(!phrases.contains(&"chicken".to_string()));
//! ```
//!
//! The `dataset` and `export` modules attach phrases to location records
//! loaded from JSON and write the result as JSON, CSV, TSV or text.

use std::path::{Path, PathBuf};

use log::info;

pub mod dataset;
pub mod error;
pub mod export;
pub mod extractor;
pub mod ngram;
pub mod score;
pub mod select;
pub mod stats;
pub mod stopwords;
pub mod tally;
pub mod tokenize;

pub use dataset::{Dataset, LocationRecord, annotate, collect_files, search};
pub use error::{PhraseError, Result};
pub use export::{ExportFormat, csv_safe_cell, save_dataset, summary};
pub use extractor::{DEFAULT_TOP_N, ExtractOptions, PhraseExtractor};
pub use stopwords::{DEFAULT_STOP_WORDS, StopWords};
pub use tally::Tally;
pub use tokenize::{ReviewText, tokenize};

/// Single words only, using the default stop-words.
pub fn extract_significant_phrases<D: ReviewText>(
    reviews: &[D],
    top_n: usize,
) -> Result<Vec<String>> {
    PhraseExtractor::default().extract_significant_phrases(reviews, top_n)
}

/// Bigrams and single words, using the default stop-words.
pub fn extract_significant_phrases_with_ngrams<D: ReviewText>(
    reviews: &[D],
    top_n: usize,
) -> Result<Vec<String>> {
    PhraseExtractor::default().extract_significant_phrases_with_ngrams(reviews, top_n)
}

/// Outcome of annotating one dataset file.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Text summary of every location and its phrases.
    pub result: String,
    /// Where the export was written.
    pub output: PathBuf,
    pub locations: usize,
}

/// Loads the dataset at `path`, annotates it and saves it into `out_dir`.
pub fn analyze_path(
    path: &Path,
    stop_words: &StopWords,
    options: &ExtractOptions,
    format: ExportFormat,
    out_dir: &Path,
) -> Result<AnalysisReport> {
    let mut dataset = Dataset::load(path)?;
    annotate(&mut dataset, &PhraseExtractor::new(stop_words), options)?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let output = save_dataset(&dataset, &stem, out_dir, format)?;
    info!("wrote {}", output.display());

    Ok(AnalysisReport {
        result: summary(&dataset),
        output,
        locations: dataset.locations.len(),
    })
}
