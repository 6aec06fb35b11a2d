use crate::stats::{inverse_document_frequency, term_frequency};
use crate::tally::Tally;

/// TF-IDF of one document: each term frequency times the term's IDF.
///
/// A term missing from `idf` scores 0.
pub fn tf_idf(tf: &Tally<f64>, idf: &Tally<f64>) -> Tally<f64> {
    tf.map_values(|term, freq| freq * idf.get(term).unwrap_or(0.0))
}

/// Per-document TF-IDF tallies for a tokenized document set.
pub fn document_scores(documents: &[Vec<String>]) -> Vec<Tally<f64>> {
    let idf = inverse_document_frequency(documents);
    documents
        .iter()
        .map(|tokens| tf_idf(&term_frequency(tokens), &idf))
        .collect()
}

/// Sums the per-document scores into one corpus-wide tally.
pub fn aggregate(scores: &[Tally<f64>]) -> Tally<f64> {
    scores.iter().fold(Tally::new(), |mut total, doc| {
        for (term, score) in doc.iter() {
            total.add(term, score);
        }
        total
    })
}

/// The `top_n` terms by aggregated TF-IDF, ties in first-seen order.
pub fn top_terms(documents: &[Vec<String>], top_n: usize) -> Vec<String> {
    aggregate(&document_scores(documents)).top_keys(top_n)
}
