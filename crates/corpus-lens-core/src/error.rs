//! Error types for corpus-lens-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading documents or building visualization data.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A document or stopword file could not be read or decoded.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// The file that was being read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A source file exceeds the configured input limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// The oversized file.
        path: Utf8PathBuf,
        /// Its size in bytes.
        size: u64,
        /// The configured limit in bytes.
        limit: usize,
    },

    /// A custom parser returned something other than a mapping with `clean_text`.
    #[error("invalid parser result for {source_path}: {reason}")]
    InvalidParserResult {
        /// The source handed to the parser.
        source_path: Utf8PathBuf,
        /// What was wrong with the result.
        reason: String,
    },

    /// A visualization was requested before any document was loaded.
    #[error("no documents loaded; load at least one document before calling {operation}")]
    EmptyCorpus {
        /// The transform that was attempted.
        operation: &'static str,
    },

    /// None of the selected words appears in any loaded document.
    #[error("no overlapping words found for flow diagram (selected: {})", words.join(", "))]
    NoOverlap {
        /// The words that were selected.
        words: Vec<String>,
    },

    /// An optional rendering capability is not available in this build.
    #[error("{capability} rendering is not available; enable a renderer for it")]
    CapabilityUnavailable {
        /// Name of the missing capability.
        capability: &'static str,
    },
}

/// Result type alias using [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;
