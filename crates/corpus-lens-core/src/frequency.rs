//! Word-frequency aggregation.
//!
//! [`FrequencyTable`] remembers the order in which words were first seen,
//! so every "top N" query breaks ties by first occurrence instead of by
//! hash-map iteration order.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Word → occurrence count, in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every token in order.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut table = Self::default();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    fn add(&mut self, word: &str) {
        if let Some(&pos) = self.index.get(word) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), 1));
        }
    }

    /// Count for `word`, or 0 when absent.
    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map_or(0, |&pos| self.entries[pos].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Iterate `(word, count)` pairs in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// Equal counts keep first-encountered order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// All counts sorted descending.
    pub fn sorted_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.entries.iter().map(|(_, c)| *c).collect();
        counts.sort_by(|a, b| b.cmp(a));
        counts
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// Summary statistics derived from a token sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenStats {
    /// Number of tokens.
    pub word_count: usize,
    /// Mean character length of the tokens; 0 when there are none.
    pub avg_word_length: f64,
    /// Number of distinct tokens.
    pub vocab_size: usize,
}

impl TokenStats {
    /// Compute statistics for `tokens` given their frequency table.
    pub fn compute<S: AsRef<str>>(tokens: &[S], freq: &FrequencyTable) -> Self {
        let word_count = tokens.len();
        let avg_word_length = if word_count == 0 {
            0.0
        } else {
            let chars: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();
            chars as f64 / word_count as f64
        };
        Self {
            word_count,
            avg_word_length,
            vocab_size: freq.len(),
        }
    }
}
