//! Core library for corpus-lens.
//!
//! Loads small plain-text corpora, computes word-frequency statistics, and
//! derives the data behind three comparative visualizations: a
//! document → word flow diagram, a grid of per-document top-word charts,
//! and overlaid rank–frequency curves.
//!
//! # Modules
//!
//! - [`text`] - Normalization and tokenization
//! - [`stopwords`] - Stopword sets and filtering
//! - [`frequency`] - Frequency tables and token statistics
//! - [`document`] - Document records and the custom parser contract
//! - [`corpus`] - The ordered corpus store and loader
//! - [`flow`] - Flow-diagram graphs and the rendering capability
//! - [`grid`] - Top-words chart grid
//! - [`rank`] - Rank–frequency curves
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use corpus_lens_core::{Corpus, WordSelection, build_flow, rank_frequency};
//!
//! let mut corpus = Corpus::new();
//! corpus.insert_text("doc1", "cat dog cat");
//! corpus.insert_text("doc2", "dog dog bird");
//!
//! let graph = build_flow(&corpus, &WordSelection::TopK(1)).unwrap();
//! assert_eq!(graph.words(), ["cat", "dog"]);
//!
//! let curves = rank_frequency(&corpus, 50).unwrap();
//! assert_eq!(curves.len(), 2);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod flow;
pub mod frequency;
pub mod grid;
pub mod rank;
pub mod stopwords;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use corpus::{Corpus, DocumentSummary, WordCount};
pub use document::{DocumentParser, DocumentRecord, ParsedDocument, ParserKind};
pub use error::{ConfigError, ConfigResult, CorpusError, CorpusResult};
pub use flow::{FlowGraph, FlowRenderer, WordSelection, build_flow, render_flow};
pub use grid::{GridCell, TopWordsChart, TopWordsGrid, top_words_grid};
pub use rank::{RankFrequencyCurve, RankPoint, rank_frequency};
pub use stopwords::Stopwords;
