//! Corpus statistics: term frequency per document and inverse document
//! frequency across a tokenized document set.

use std::collections::HashSet;

use crate::tally::Tally;

/// Normalized term frequencies of one tokenized document.
///
/// Each token maps to `occurrences / token_count`, so the values of a
/// non-empty document sum to 1.0. A document without tokens yields an empty
/// tally.
pub fn term_frequency(tokens: &[String]) -> Tally<f64> {
    if tokens.is_empty() {
        return Tally::new();
    }
    let mut counts: Tally<usize> = Tally::new();
    for token in tokens {
        counts.add(token, 1);
    }
    let total = tokens.len() as f64;
    counts.map_values(|_, count| count as f64 / total)
}

/// Number of documents each token appears in (at most one per document).
pub fn document_frequency(documents: &[Vec<String>]) -> Tally<usize> {
    let mut df: Tally<usize> = Tally::new();
    for doc in documents {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in doc {
            if seen.insert(token.as_str()) {
                df.add(token, 1);
            }
        }
    }
    df
}

/// `ln(N / df)` for every token of the set, N counting empty documents too.
///
/// A token found in every document scores exactly 0. With no documents there
/// are no tokens, so the result is empty rather than a division by zero.
pub fn inverse_document_frequency(documents: &[Vec<String>]) -> Tally<f64> {
    if documents.is_empty() {
        return Tally::new();
    }
    let total = documents.len() as f64;
    document_frequency(documents).map_values(|_, df| (total / df as f64).ln())
}
