//! Flow command: document-to-word links, optionally rendered as a Sankey figure.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use corpus_lens_core::{WordSelection, build_flow, render_flow};
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, info, instrument};

use super::{CorpusArgs, LoadContext, load_corpus};
use crate::render;

/// Arguments for the `flow` subcommand.
#[derive(Args, Debug)]
pub struct FlowArgs {
    /// Documents and loading options.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Explicit words to link (comma-separated). Overrides --top-k.
    #[arg(long, value_delimiter = ',', value_name = "WORD")]
    pub words: Vec<String>,

    /// Take the union of each document's K most frequent words.
    #[arg(long, value_name = "K")]
    pub top_k: Option<usize>,

    /// Write the rendered diagram here (.html for a page, otherwise JSON).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

impl FlowArgs {
    fn selection(&self, default_k: usize) -> WordSelection {
        let words: Vec<String> = self
            .words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            WordSelection::TopK(self.top_k.unwrap_or(default_k))
        } else {
            WordSelection::Words(words)
        }
    }
}

/// Build the flow graph and print or render it.
#[instrument(name = "cmd_flow", skip_all)]
pub fn cmd_flow(args: FlowArgs, global_json: bool, ctx: LoadContext<'_>) -> anyhow::Result<()> {
    let selection = args.selection(ctx.config.top_k);
    debug!(?selection, output = ?args.output, "executing flow command");

    let corpus = load_corpus(&args.corpus, ctx)?;
    let graph = build_flow(&corpus, &selection).context("failed to build flow graph")?;

    if let Some(ref path) = args.output {
        let backend = render::flow_backend();
        let figure = render_flow(&graph, backend.as_deref())?;
        let document = render::figure_document(&figure, path)?;
        std::fs::write(path, document)
            .with_context(|| format!("failed to write flow diagram to {path}"))?;
        info!(%path, links = graph.link_count(), "flow diagram written");
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
        return Ok(());
    }

    println!(
        "{} ({} documents, {} words, {} links)",
        "Text-to-word flow".if_supports_color(Stream::Stdout, |t| t.bold()),
        graph.document_count,
        graph.words().len(),
        graph.link_count(),
    );
    for (doc, word, count) in graph.links() {
        println!(
            "  {} -> {}: {}",
            doc.if_supports_color(Stream::Stdout, |t| t.cyan()),
            word,
            count
        );
    }
    if let Some(ref path) = args.output {
        println!("Diagram written to {path}");
    }

    Ok(())
}
