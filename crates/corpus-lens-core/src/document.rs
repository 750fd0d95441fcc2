//! Document records and the custom parser contract.
//!
//! A [`DocumentRecord`] is built once from normalized text and never
//! mutated afterwards. Custom parsers return a [`ParsedDocument`]: the
//! required `clean_text` plus a typed side-map of extension values that
//! can never overwrite the fixed record fields.

use std::collections::BTreeMap;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{CorpusError, CorpusResult};
use crate::frequency::{FrequencyTable, TokenStats};
use crate::stopwords::Stopwords;
use crate::text;

/// Field names owned by [`DocumentRecord`]; extensions may not use them.
pub const RESERVED_FIELDS: &[&str] = &[
    "label",
    "clean_text",
    "tokens",
    "word_freq",
    "word_count",
    "avg_word_length",
    "vocab_size",
];

/// Statistics and derived text for one labeled document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    /// Label the document was loaded under.
    pub label: String,
    /// Normalized text.
    pub clean_text: String,
    /// Tokens after stopword filtering, in document order.
    pub tokens: Vec<String>,
    /// Word → count over `tokens`.
    pub word_freq: FrequencyTable,
    /// Number of tokens.
    pub word_count: usize,
    /// Mean token length in characters; 0 for an empty document.
    pub avg_word_length: f64,
    /// Number of distinct tokens.
    pub vocab_size: usize,
    /// Extra values supplied by a custom parser.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
}

impl DocumentRecord {
    /// Tokenize `clean_text`, drop stopwords, and derive all statistics.
    pub fn build(
        label: impl Into<String>,
        clean_text: String,
        stopwords: &Stopwords,
        extensions: BTreeMap<String, Value>,
    ) -> Self {
        let tokens = stopwords.filter(text::tokenize(&clean_text));
        let word_freq = FrequencyTable::from_tokens(&tokens);
        let stats = TokenStats::compute(&tokens, &word_freq);
        Self {
            label: label.into(),
            clean_text,
            tokens,
            word_freq,
            word_count: stats.word_count,
            avg_word_length: stats.avg_word_length,
            vocab_size: stats.vocab_size,
            extensions,
        }
    }

    /// The `n` most frequent words of this document.
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        self.word_freq.most_common(n)
    }
}

/// The result of a custom parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    /// Already-normalized text; tokenized by whitespace.
    pub clean_text: String,
    /// Extra values merged into the record.
    pub extensions: BTreeMap<String, Value>,
}

impl ParsedDocument {
    /// A parsed document without extensions.
    pub fn new(clean_text: impl Into<String>) -> Self {
        Self {
            clean_text: clean_text.into(),
            extensions: BTreeMap::new(),
        }
    }

    /// Attach an extension value.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    /// Validate a loosely typed parser result.
    ///
    /// The value must be a JSON object with a string `clean_text`; every
    /// other key becomes an extension.
    pub fn from_value(source: &Utf8Path, value: Value) -> CorpusResult<Self> {
        let invalid = |reason: &str| CorpusError::InvalidParserResult {
            source_path: source.to_path_buf(),
            reason: reason.to_string(),
        };

        let Value::Object(mut map) = value else {
            return Err(invalid("expected a mapping containing 'clean_text'"));
        };
        let clean_text = match map.remove("clean_text") {
            Some(Value::String(s)) => s,
            Some(_) => return Err(invalid("'clean_text' must be a string")),
            None => return Err(invalid("missing required field 'clean_text'")),
        };

        Ok(Self {
            clean_text,
            extensions: map.into_iter().collect(),
        })
    }

    /// Drop extension keys that collide with fixed record fields.
    pub(crate) fn into_parts(self, label: &str) -> (String, BTreeMap<String, Value>) {
        let mut extensions = self.extensions;
        extensions.retain(|key, _| {
            let reserved = RESERVED_FIELDS.contains(&key.as_str());
            if reserved {
                warn!(label, key = key.as_str(), "ignoring extension that shadows a fixed field");
            }
            !reserved
        });
        (self.clean_text, extensions)
    }
}

/// A caller-supplied document parser.
pub trait DocumentParser {
    /// Turn `source` into normalized text plus optional extensions.
    fn parse(&self, source: &Utf8Path) -> CorpusResult<ParsedDocument>;
}

impl<F> DocumentParser for F
where
    F: Fn(&Utf8Path) -> CorpusResult<ParsedDocument>,
{
    fn parse(&self, source: &Utf8Path) -> CorpusResult<ParsedDocument> {
        self(source)
    }
}

/// Read a UTF-8 text file, rejecting files larger than `max_bytes`.
pub fn read_text(path: &Utf8Path, max_bytes: Option<usize>) -> CorpusResult<String> {
    let file_read = |source| CorpusError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    if let Some(limit) = max_bytes {
        let size = std::fs::metadata(path.as_std_path())
            .map_err(file_read)?
            .len();
        if size > limit as u64 {
            return Err(CorpusError::InputTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    std::fs::read_to_string(path.as_std_path()).map_err(file_read)
}

/// Normalizes a text file and keeps the raw text and counts as extensions.
///
/// Attaches `raw_text`, `numwords` (token count before stopword removal)
/// and `wordcount` (the unfiltered frequency table).
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTextParser {
    /// Reject source files larger than this many bytes.
    pub max_input_bytes: Option<usize>,
}

impl DocumentParser for RawTextParser {
    fn parse(&self, source: &Utf8Path) -> CorpusResult<ParsedDocument> {
        let raw = read_text(source, self.max_input_bytes)?;
        let clean_text = text::normalize(&raw);
        let words = text::tokenize(&clean_text);
        let wordcount = serde_json::to_value(FrequencyTable::from_tokens(&words))
            .unwrap_or(Value::Null);

        Ok(ParsedDocument::new(clean_text)
            .with_extension("numwords", words.len())
            .with_extension("wordcount", wordcount)
            .with_extension("raw_text", raw))
    }
}

/// Reads a JSON object from the source file and validates it as a parser result.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordParser {
    /// Reject source files larger than this many bytes.
    pub max_input_bytes: Option<usize>,
}

impl DocumentParser for JsonRecordParser {
    fn parse(&self, source: &Utf8Path) -> CorpusResult<ParsedDocument> {
        let raw = read_text(source, self.max_input_bytes)?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|e| CorpusError::InvalidParserResult {
                source_path: source.to_path_buf(),
                reason: format!("not valid JSON: {e}"),
            })?;
        ParsedDocument::from_value(source, value)
    }
}

/// Which built-in loading mode to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ParserKind {
    /// Read the file and normalize it.
    #[default]
    Default,
    /// Like `default`, plus raw text and unfiltered counts as extensions.
    Raw,
    /// The file is a JSON object with `clean_text` and optional extras.
    Json,
}

impl ParserKind {
    /// Returns the parser name as used in config and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Raw => "raw",
            Self::Json => "json",
        }
    }

    /// The custom parser for this mode, or `None` for default mode.
    ///
    /// `max_input_bytes` bounds the source files the parser will read.
    pub fn parser(self, max_input_bytes: Option<usize>) -> Option<Box<dyn DocumentParser>> {
        match self {
            Self::Default => None,
            Self::Raw => Some(Box::new(RawTextParser { max_input_bytes })),
            Self::Json => Some(Box::new(JsonRecordParser { max_input_bytes })),
        }
    }
}

impl std::fmt::Display for ParserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
