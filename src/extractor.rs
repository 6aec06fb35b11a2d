//! The phrase extractor: tokenizer, TF-IDF scorer, bigram miner and
//! selector wired together over one location's reviews.

use log::debug;

use crate::error::{PhraseError, Result};
use crate::ngram::{ngrams, top_bigrams};
use crate::score::{document_scores, top_terms};
use crate::select::merge_phrases;
use crate::stopwords::StopWords;
use crate::tally::Tally;
use crate::tokenize::{ReviewText, tokenize, tokenize_all};

/// Result count used by the dashboard for every location.
pub const DEFAULT_TOP_N: usize = 5;

/// What to extract per location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Upper bound on returned phrases; must be at least 1.
    pub top_n: usize,
    /// Mix bigrams into the result. Off means single words only.
    pub with_ngrams: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            with_ngrams: true,
        }
    }
}

/// Extracts representative phrases from a set of reviews.
///
/// Holds nothing but a shared reference to the stop-word set, so one
/// extractor can serve any number of concurrent calls. Every call
/// recomputes its statistics from scratch.
///
/// # Example
/// ```
/// use review_phrases::PhraseExtractor;
/// let extractor = PhraseExtractor::default();
/// let reviews = ["Love the mild sauce", "Mild sauce on everything", "Fries were cold"];
/// let phrases = extractor.extract_significant_phrases_with_ngrams(&reviews, 3).unwrap();
/// assert_eq!(phrases[0], "mild sauce");
/// assert!(phrases.len() <= 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhraseExtractor<'s> {
    stop_words: &'s StopWords,
}

impl Default for PhraseExtractor<'static> {
    fn default() -> Self {
        Self::new(StopWords::default_set())
    }
}

impl<'s> PhraseExtractor<'s> {
    pub fn new(stop_words: &'s StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &'s StopWords {
        self.stop_words
    }

    pub fn tokenize(&self, text: Option<&str>) -> Vec<String> {
        tokenize(text, self.stop_words)
    }

    /// N-grams of one review's tokens.
    pub fn generate_ngrams(&self, text: Option<&str>, n: usize) -> Vec<String> {
        ngrams(&self.tokenize(text), n)
    }

    /// Per-review TF-IDF tallies, in review order.
    pub fn calculate_tf_idf<D: ReviewText>(&self, reviews: &[D]) -> Vec<Tally<f64>> {
        document_scores(&tokenize_all(reviews, self.stop_words))
    }

    /// The `top_n` single words with the highest TF-IDF summed over all reviews.
    pub fn extract_significant_phrases<D: ReviewText>(
        &self,
        reviews: &[D],
        top_n: usize,
    ) -> Result<Vec<String>> {
        check_top_n(top_n)?;
        let Some(documents) = self.corpus(reviews) else {
            return Ok(Vec::new());
        };
        Ok(top_terms(&documents, top_n))
    }

    /// Up to `top_n` phrases: the most frequent bigrams (at most half the
    /// budget, rounded up) followed by the best single words.
    pub fn extract_significant_phrases_with_ngrams<D: ReviewText>(
        &self,
        reviews: &[D],
        top_n: usize,
    ) -> Result<Vec<String>> {
        check_top_n(top_n)?;
        let Some(documents) = self.corpus(reviews) else {
            return Ok(Vec::new());
        };
        let words = top_terms(&documents, top_n);
        let bigrams = top_bigrams(&documents, top_n);
        Ok(merge_phrases(bigrams, words, top_n))
    }

    pub fn extract<D: ReviewText>(
        &self,
        reviews: &[D],
        options: &ExtractOptions,
    ) -> Result<Vec<String>> {
        if options.with_ngrams {
            self.extract_significant_phrases_with_ngrams(reviews, options.top_n)
        } else {
            self.extract_significant_phrases(reviews, options.top_n)
        }
    }

    /// Tokenized reviews, or `None` when no review has a single token.
    fn corpus<D: ReviewText>(&self, reviews: &[D]) -> Option<Vec<Vec<String>>> {
        let documents = tokenize_all(reviews, self.stop_words);
        let tokens: usize = documents.iter().map(Vec::len).sum();
        debug!("{} reviews, {} tokens", documents.len(), tokens);
        (tokens > 0).then_some(documents)
    }
}

fn check_top_n(top_n: usize) -> Result<()> {
    if top_n == 0 {
        return Err(PhraseError::InvalidTopN(top_n));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 4] = [
        "Amazing fried chicken! Crispy skin, juicy meat.",
        "Best chicken in Chicago! The mild sauce is incredible.",
        "Love their chicken wings and coleslaw.",
        "Fantastic food, quick service. The chicken is perfectly seasoned.",
    ];

    #[test]
    fn sample_reviews_prefer_bigrams_then_rare_words() {
        let phrases = PhraseExtractor::default()
            .extract_significant_phrases_with_ngrams(&SAMPLE, 5)
            .unwrap();
        // every bigram occurs once, so the first three seen win; the shortest
        // review gives the highest single-word scores
        assert_eq!(
            phrases,
            vec![
                "amazing fried",
                "fried chicken",
                "chicken crispy",
                "love",
                "wings"
            ]
        );
        assert!(!phrases.contains(&"chicken".to_string()));
    }

    #[test]
    fn single_words_suppress_the_ubiquitous_term() {
        let words = PhraseExtractor::default()
            .extract_significant_phrases(&SAMPLE, 50)
            .unwrap();
        assert_eq!(words.len(), 21);
        assert_eq!(words.last().map(String::as_str), Some("chicken"));
        let amazing = words.iter().position(|w| w == "amazing").unwrap();
        assert!(amazing < words.len() - 1);
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let extractor = PhraseExtractor::default();
        assert!(matches!(
            extractor.extract_significant_phrases_with_ngrams(&SAMPLE, 0),
            Err(PhraseError::InvalidTopN(0))
        ));
        assert!(matches!(
            extractor.extract_significant_phrases(&SAMPLE, 0),
            Err(PhraseError::InvalidTopN(0))
        ));
    }

    #[test]
    fn empty_inputs_give_empty_results() {
        let extractor = PhraseExtractor::default();
        let none: [&str; 0] = [];
        assert!(
            extractor
                .extract_significant_phrases_with_ngrams(&none, 5)
                .unwrap()
                .is_empty()
        );
        let blanks = ["", "", "the and of"];
        assert!(
            extractor
                .extract_significant_phrases_with_ngrams(&blanks, 5)
                .unwrap()
                .is_empty()
        );
        let nulls: Vec<Option<String>> = vec![None, None];
        assert!(extractor.extract_significant_phrases(&nulls, 5).unwrap().is_empty());
    }

    #[test]
    fn custom_stop_words_change_the_ranking() {
        let stop = StopWords::english().with_words(["amazing"]);
        let words = PhraseExtractor::new(&stop)
            .extract_significant_phrases(&SAMPLE, 3)
            .unwrap();
        assert!(!words.contains(&"amazing".to_string()));
    }

    #[test]
    fn options_select_single_words_only() {
        let extractor = PhraseExtractor::default();
        let options = ExtractOptions {
            top_n: 4,
            with_ngrams: false,
        };
        let words = extractor.extract(&SAMPLE, &options).unwrap();
        assert_eq!(words.len(), 4);
        assert!(words.iter().all(|w| !w.contains(' ')));
    }

    #[test]
    fn generate_ngrams_uses_the_tokenizer() {
        let extractor = PhraseExtractor::default();
        assert_eq!(
            extractor.generate_ngrams(Some("The chicken is perfectly seasoned."), 2),
            vec!["chicken perfectly", "perfectly seasoned"]
        );
        assert!(extractor.generate_ngrams(None, 2).is_empty());
    }

    #[test]
    fn tf_idf_has_one_tally_per_review() {
        let scores = PhraseExtractor::default().calculate_tf_idf(&SAMPLE);
        assert_eq!(scores.len(), SAMPLE.len());
        assert_eq!(scores[0].get("chicken"), Some(0.0));
        assert!(scores[0].get("amazing").unwrap() > 0.0);
    }
}
