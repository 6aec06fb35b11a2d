use std::collections::HashSet;

/// Bigrams first, then single words; exact duplicates dropped, cut to `top_n`.
///
/// Deduplication is by string equality only: `"chicken"` survives next to
/// `"fried chicken"`.
pub fn merge_phrases(bigrams: Vec<String>, words: Vec<String>, top_n: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    bigrams
        .into_iter()
        .chain(words)
        .filter(|phrase| seen.insert(phrase.clone()))
        .take(top_n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bigrams_lead_and_substrings_survive() {
        let merged = merge_phrases(
            strings(&["fried chicken", "mild sauce"]),
            strings(&["chicken", "amazing"]),
            5,
        );
        assert_eq!(
            merged,
            vec!["fried chicken", "mild sauce", "chicken", "amazing"]
        );
    }

    #[test]
    fn exact_duplicates_collapse_to_first_occurrence() {
        let merged = merge_phrases(
            strings(&["crispy", "juicy"]),
            strings(&["juicy", "crispy", "tender"]),
            5,
        );
        assert_eq!(merged, vec!["crispy", "juicy", "tender"]);
    }

    #[test]
    fn truncates_to_top_n() {
        let merged = merge_phrases(
            strings(&["a b", "c d", "e f"]),
            strings(&["g", "h", "i"]),
            4,
        );
        assert_eq!(merged, vec!["a b", "c d", "e f", "g"]);
    }
}
