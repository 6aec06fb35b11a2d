//! Contiguous word sequences (n-grams) and bigram frequency ranking.

use crate::tally::Tally;

/// Sliding windows of `n` tokens, each joined by a single space.
///
/// Returns nothing for `n == 0` or when there are fewer than `n` tokens.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    tokens.windows(n).map(|window| window.join(" ")).collect()
}

/// Raw bigram counts over the whole document set.
pub fn bigram_frequencies(documents: &[Vec<String>]) -> Tally<usize> {
    documents
        .iter()
        .flat_map(|tokens| ngrams(tokens, 2))
        .fold(Tally::new(), |mut counts, bigram| {
            counts.add(&bigram, 1);
            counts
        })
}

/// How many result slots bigrams may take: half of `top_n`, rounded up.
pub fn bigram_budget(top_n: usize) -> usize {
    top_n.div_ceil(2)
}

/// The most frequent bigrams, at most `bigram_budget(top_n)`, ties in first-seen order.
pub fn top_bigrams(documents: &[Vec<String>], top_n: usize) -> Vec<String> {
    bigram_frequencies(documents).top_keys(bigram_budget(top_n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn windows_join_with_single_space() {
        assert_eq!(
            ngrams(&doc("fried chicken wings"), 2),
            vec!["fried chicken", "chicken wings"]
        );
        assert_eq!(
            ngrams(&doc("alpha beta gamma delta"), 3),
            vec!["alpha beta gamma", "beta gamma delta"]
        );
    }

    #[test]
    fn too_short_documents_emit_nothing() {
        assert!(ngrams(&doc("lonely"), 2).is_empty());
        assert!(ngrams(&[], 2).is_empty());
        assert!(ngrams(&doc("one two"), 0).is_empty());
    }

    #[test]
    fn bigrams_do_not_span_documents() {
        let docs = vec![doc("mild sauce"), doc("hot wings")];
        let counts = bigram_frequencies(&docs);
        assert_eq!(counts.len(), 2);
        assert!(!counts.contains_key("sauce hot"));
    }

    #[test]
    fn top_bigrams_rank_by_count_within_budget() {
        let docs = vec![
            doc("fried chicken tastes great"),
            doc("great fried chicken"),
            doc("mild sauce fried chicken"),
            doc("mild sauce"),
        ];
        // budget for 5 is 3
        assert_eq!(
            top_bigrams(&docs, 5),
            vec!["fried chicken", "mild sauce", "chicken tastes"]
        );
    }

    #[test]
    fn budget_rounds_up() {
        assert_eq!(bigram_budget(1), 1);
        assert_eq!(bigram_budget(4), 2);
        assert_eq!(bigram_budget(5), 3);
    }
}
