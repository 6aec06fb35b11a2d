use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::AddAssign;

/// A string-keyed accumulator that remembers the order keys were first seen.
///
/// Every map the engine builds (term frequencies, document frequencies, IDF,
/// aggregated scores, bigram counts) is a `Tally`, so iteration order, and
/// with it tie-breaking in [`Tally::ranked`], only depends on input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V: Copy> Tally<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. An existing key keeps its original position.
    pub fn insert(&mut self, key: &str, value: V) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies `f` to every value, keeping keys and order.
    pub fn map_values<W: Copy>(&self, mut f: impl FnMut(&str, V) -> W) -> Tally<W> {
        Tally {
            index: self.index.clone(),
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), f(k.as_str(), *v)))
                .collect(),
        }
    }
}

impl<V: Copy + AddAssign> Tally<V> {
    /// Adds `amount` to the value of `key`, inserting it first if unseen.
    pub fn add(&mut self, key: &str, amount: V) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), amount));
            }
        }
    }
}

impl<V: Copy + PartialOrd> Tally<V> {
    /// The `limit` highest-valued entries, descending. Ties keep first-seen order.
    pub fn ranked(&self, limit: usize) -> Vec<(&str, V)> {
        let mut sorted: Vec<(&str, V)> = self.iter().collect();
        // sort_by is stable
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        sorted.truncate(limit);
        sorted
    }

    /// Keys of [`Tally::ranked`], owned.
    pub fn top_keys(&self, limit: usize) -> Vec<String> {
        self.ranked(limit)
            .into_iter()
            .map(|(k, _)| k.to_owned())
            .collect()
    }
}
