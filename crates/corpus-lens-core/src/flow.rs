//! Document → word flow graphs.
//!
//! [`build_flow`] turns the corpus into a bipartite node/link structure.
//! Drawing it is left to a [`FlowRenderer`], which lives outside this crate;
//! [`render_flow`] reports [`CorpusError::CapabilityUnavailable`] when the
//! caller has none.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{CorpusError, CorpusResult};

/// Default number of words taken from each document when auto-selecting.
pub const DEFAULT_TOP_K: usize = 5;

/// How the word nodes of a flow graph are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSelection {
    /// Union of every document's `k` most frequent words, sorted alphabetically.
    TopK(usize),
    /// Exactly these words (lowercased), in the given order.
    Words(Vec<String>),
}

impl Default for WordSelection {
    fn default() -> Self {
        Self::TopK(DEFAULT_TOP_K)
    }
}

/// Bipartite node/link data for a flow diagram.
///
/// Nodes are the document labels (store order) followed by the selected
/// words. Link `i` runs from `labels[sources[i]]` to `labels[targets[i]]`
/// with weight `values[i]`, always > 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    /// Node labels.
    pub labels: Vec<String>,
    /// Link source node indices (documents).
    pub sources: Vec<usize>,
    /// Link target node indices (words).
    pub targets: Vec<usize>,
    /// Link weights (word counts).
    pub values: Vec<usize>,
    /// How many leading nodes are documents.
    pub document_count: usize,
}

impl FlowGraph {
    /// The word nodes.
    pub fn words(&self) -> &[String] {
        &self.labels[self.document_count..]
    }

    /// Iterate links as `(document, word, count)`.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str, usize)> {
        self.sources
            .iter()
            .zip(&self.targets)
            .zip(&self.values)
            .map(|((&s, &t), &v)| (self.labels[s].as_str(), self.labels[t].as_str(), v))
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.values.len()
    }
}

/// Build the flow graph for `corpus`.
#[tracing::instrument(skip(corpus), fields(documents = corpus.len()))]
pub fn build_flow(corpus: &Corpus, selection: &WordSelection) -> CorpusResult<FlowGraph> {
    corpus.require_documents("build_flow")?;

    let words: Vec<String> = match selection {
        WordSelection::TopK(k) => corpus
            .iter()
            .flat_map(|record| record.top_words(*k))
            .map(|(word, _)| word.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        WordSelection::Words(list) => list.iter().map(|w| w.to_lowercase()).collect(),
    };

    let document_count = corpus.len();
    let mut labels: Vec<String> = corpus.labels().map(str::to_string).collect();
    labels.extend(words.iter().cloned());

    let mut sources = Vec::new();
    let mut targets = Vec::new();
    let mut values = Vec::new();

    for (doc_idx, record) in corpus.iter().enumerate() {
        for (word_idx, word) in words.iter().enumerate() {
            let count = record.word_freq.get(word);
            if count > 0 {
                sources.push(doc_idx);
                targets.push(document_count + word_idx);
                values.push(count);
            }
        }
    }

    if values.is_empty() {
        return Err(CorpusError::NoOverlap { words });
    }

    debug!(
        words = words.len(),
        links = values.len(),
        "flow graph built"
    );

    Ok(FlowGraph {
        labels,
        sources,
        targets,
        values,
        document_count,
    })
}

/// A diagramming backend that can draw a [`FlowGraph`].
pub trait FlowRenderer {
    /// Output produced by the renderer.
    type Output;

    /// Draw the graph.
    fn render(&self, graph: &FlowGraph) -> CorpusResult<Self::Output>;
}

/// Render `graph` with `renderer`, or fail when no renderer is available.
pub fn render_flow<R: FlowRenderer + ?Sized>(
    graph: &FlowGraph,
    renderer: Option<&R>,
) -> CorpusResult<R::Output> {
    let renderer = renderer.ok_or(CorpusError::CapabilityUnavailable {
        capability: "flow diagram",
    })?;
    renderer.render(graph)
}
