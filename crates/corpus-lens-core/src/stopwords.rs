//! Stopword filtering.
//!
//! A [`Stopwords`] set is owned by a [`Corpus`](crate::corpus::Corpus) and
//! consulted every time a document is loaded. An empty set filters nothing.

use std::collections::HashSet;

use camino::Utf8Path;
use tracing::info;

use crate::error::{CorpusError, CorpusResult};

/// A set of normalized words excluded from token streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Create an empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a list of words.
    ///
    /// Each word is trimmed and lowercased; blank entries are dropped.
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

    /// Parse a stopword file body: one word per line.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(contents.lines())
    }

    /// Load a stopword file from disk.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> CorpusResult<Self> {
        let contents =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| CorpusError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let stopwords = Self::parse(&contents);
        info!(count = stopwords.len(), "loaded {} stop words", stopwords.len());
        Ok(stopwords)
    }

    /// Check whether a token is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove stopwords from a token stream, preserving the order of the rest.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        if self.words.is_empty() {
            return tokens;
        }
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &[&str]) -> Vec<String> {
        s.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn filter_removes_exact_matches_in_order() {
        let stop = Stopwords::from_words(["a"]);
        assert_eq!(stop.filter(tokens(&["a", "b", "a"])), tokens(&["b"]));
        assert_eq!(
            stop.filter(tokens(&["c", "a", "b", "a", "d"])),
            tokens(&["c", "b", "d"])
        );
    }

    #[test]
    fn empty_set_is_identity() {
        let stop = Stopwords::empty();
        let input = tokens(&["the", "desk", "the"]);
        assert_eq!(stop.filter(input.clone()), input);
    }

    #[test]
    fn parse_trims_lowercases_and_skips_blank_lines() {
        let stop = Stopwords::parse("The\n  AND  \n\n\t\nof\r\n");
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
        assert!(stop.contains("of"));
        assert!(!stop.contains(""));
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "the\nand\n").unwrap();
        let path = Utf8Path::from_path(tmp.path()).unwrap();
        let stop = Stopwords::load(path).unwrap();
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = Stopwords::load(Utf8Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::FileRead { .. }));
    }
}
