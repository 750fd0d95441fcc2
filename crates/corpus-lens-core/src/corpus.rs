//! The corpus store and document loader.
//!
//! A [`Corpus`] is an ordered collection of [`DocumentRecord`]s keyed by
//! label, together with the stopword set applied to every subsequent load.
//! Records are only ever replaced whole; a failed load leaves the store
//! untouched.

use std::collections::{BTreeMap, HashMap};

use camino::Utf8Path;
use serde::Serialize;
use tracing::debug;

use crate::document::{self, DocumentParser, DocumentRecord};
use crate::error::{CorpusError, CorpusResult};
use crate::stopwords::Stopwords;
use crate::text;

/// Ordered label → record store.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<DocumentRecord>,
    index: HashMap<String, usize>,
    stopwords: Stopwords,
    max_input_bytes: Option<usize>,
}

impl Corpus {
    /// An empty corpus without stopwords or input limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `stopwords` for every subsequent load.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Reject default-mode source files larger than `limit` bytes.
    #[must_use]
    pub const fn with_max_input_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = limit;
        self
    }

    /// Replace the stopword set. Already loaded documents are not refiltered.
    pub fn set_stopwords(&mut self, stopwords: Stopwords) {
        self.stopwords = stopwords;
    }

    /// Load a stopword file, replacing the current set.
    pub fn load_stopwords(&mut self, path: &Utf8Path) -> CorpusResult<&Stopwords> {
        self.stopwords = Stopwords::load(path)?;
        Ok(&self.stopwords)
    }

    /// The stopword set currently in effect.
    pub const fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Read `source`, normalize it, and store the result under `label`.
    #[tracing::instrument(skip(self, source), fields(source = %source))]
    pub fn load(&mut self, source: &Utf8Path, label: &str) -> CorpusResult<&DocumentRecord> {
        let raw = document::read_text(source, self.max_input_bytes)?;
        Ok(self.insert_text(label, &raw))
    }

    /// Load `source` through a custom parser and store the result under `label`.
    #[tracing::instrument(skip(self, source, parser), fields(source = %source))]
    pub fn load_with(
        &mut self,
        source: &Utf8Path,
        label: &str,
        parser: &dyn DocumentParser,
    ) -> CorpusResult<&DocumentRecord> {
        let parsed = parser.parse(source)?;
        let (clean_text, extensions) = parsed.into_parts(label);
        let record = DocumentRecord::build(label, clean_text, &self.stopwords, extensions);
        Ok(self.store(record))
    }

    /// Normalize in-memory text and store it under `label`.
    pub fn insert_text(&mut self, label: &str, raw: &str) -> &DocumentRecord {
        let clean_text = text::normalize(raw);
        let record = DocumentRecord::build(label, clean_text, &self.stopwords, BTreeMap::new());
        self.store(record)
    }

    fn store(&mut self, record: DocumentRecord) -> &DocumentRecord {
        debug!(
            label = record.label.as_str(),
            word_count = record.word_count,
            vocab_size = record.vocab_size,
            avg_word_length = record.avg_word_length,
            "document loaded"
        );
        let pos = match self.index.get(&record.label) {
            Some(&pos) => {
                self.records[pos] = record;
                pos
            }
            None => {
                let pos = self.records.len();
                self.index.insert(record.label.clone(), pos);
                self.records.push(record);
                pos
            }
        };
        &self.records[pos]
    }

    /// Look up a record by label.
    pub fn get(&self, label: &str) -> Option<&DocumentRecord> {
        self.index.get(label).map(|&pos| &self.records[pos])
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.records.iter()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.label.as_str())
    }

    /// Number of loaded documents.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no documents are loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fail with [`CorpusError::EmptyCorpus`] when nothing is loaded.
    pub fn require_documents(&self, operation: &'static str) -> CorpusResult<()> {
        if self.is_empty() {
            return Err(CorpusError::EmptyCorpus { operation });
        }
        Ok(())
    }

    /// Per-document word counts and top words.
    pub fn summary(&self, top: usize) -> Vec<DocumentSummary> {
        self.iter()
            .map(|record| DocumentSummary {
                label: record.label.clone(),
                word_count: record.word_count,
                vocab_size: record.vocab_size,
                avg_word_length: record.avg_word_length,
                top_words: record
                    .top_words(top)
                    .into_iter()
                    .map(|(word, count)| WordCount {
                        word: word.to_string(),
                        count,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// A word and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// The word.
    pub word: String,
    /// Occurrences.
    pub count: usize,
}

/// Headline statistics for one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    /// Document label.
    pub label: String,
    /// Tokens after stopword removal.
    pub word_count: usize,
    /// Distinct tokens.
    pub vocab_size: usize,
    /// Mean token length.
    pub avg_word_length: f64,
    /// Most frequent words, highest first.
    pub top_words: Vec<WordCount>,
}
