use proptest::prelude::*;
use review_phrases::stats::{inverse_document_frequency, term_frequency};
use review_phrases::tokenize::tokenize_all;
use review_phrases::{PhraseExtractor, StopWords, tokenize};

fn review() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "chicken", "mild", "sauce", "crispy", "the", "and", "wings", "slow", "fries", "ok",
            "great", "Great!", "service,", "x",
        ]),
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn tokens_are_long_and_not_stop_words(s in ".{0,200}") {
        let stop = StopWords::default_set();
        for token in tokenize(Some(s.as_str()), stop) {
            prop_assert!(token.chars().count() > 2);
            prop_assert!(!stop.contains(&token));
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn tokenize_is_deterministic(s in ".{0,200}") {
        let stop = StopWords::default_set();
        prop_assert_eq!(tokenize(Some(s.as_str()), stop), tokenize(Some(s.as_str()), stop));
    }

    #[test]
    fn term_frequencies_sum_to_one(text in review()) {
        let tokens = tokenize(Some(text.as_str()), StopWords::default_set());
        let tf = term_frequency(&tokens);
        if tokens.is_empty() {
            prop_assert!(tf.is_empty());
        } else {
            let sum: f64 = tf.iter().map(|(_, v)| v).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn idf_is_non_negative_and_zero_only_for_universal_terms(
        reviews in prop::collection::vec(review(), 1..8)
    ) {
        let docs = tokenize_all(&reviews, StopWords::default_set());
        let idf = inverse_document_frequency(&docs);
        for (term, value) in idf.iter() {
            prop_assert!(value >= 0.0);
            let everywhere = docs.iter().all(|d| d.iter().any(|t| t == term));
            prop_assert_eq!(value == 0.0, everywhere);
        }
    }

    #[test]
    fn extraction_is_bounded_unique_and_repeatable(
        reviews in prop::collection::vec(review(), 0..8),
        top_n in 1usize..10
    ) {
        let extractor = PhraseExtractor::default();
        let first = extractor.extract_significant_phrases_with_ngrams(&reviews, top_n).unwrap();
        let second = extractor.extract_significant_phrases_with_ngrams(&reviews, top_n).unwrap();
        prop_assert!(first.len() <= top_n);
        let mut unique = first.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), first.len());
        for phrase in &first {
            prop_assert!(phrase.split(' ').count() <= 2);
        }
        prop_assert_eq!(first, second);
    }
}
