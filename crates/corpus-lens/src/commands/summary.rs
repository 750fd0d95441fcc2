//! Summary command: word counts and top words per document.

use anyhow::Context;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use super::{CorpusArgs, LoadContext, load_corpus};

/// Arguments for the `summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Documents and loading options.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Number of top words listed per document.
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

/// Load the corpus and print per-document statistics.
#[instrument(name = "cmd_summary", skip_all)]
pub fn cmd_summary(args: SummaryArgs, global_json: bool, ctx: LoadContext<'_>) -> anyhow::Result<()> {
    debug!(docs = args.corpus.docs.len(), top = args.top, "executing summary command");

    let corpus = load_corpus(&args.corpus, ctx)?;
    corpus
        .require_documents("summary")
        .context("nothing to summarize")?;
    let summary = corpus.summary(args.top);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let heading = if corpus.stopwords().is_empty() {
        "Text summary"
    } else {
        "Text summary (after stopword removal)"
    };
    println!(
        "{}",
        heading.if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for doc in &summary {
        println!(
            "  {}: {} tokens, {} distinct, avg length {:.2}",
            doc.label.if_supports_color(Stream::Stdout, |t| t.cyan()),
            doc.word_count,
            doc.vocab_size,
            doc.avg_word_length,
        );
    }

    println!();
    let top_heading = format!("Top {} words per text", args.top);
    println!(
        "{}",
        top_heading.if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for doc in &summary {
        let words: Vec<String> = doc
            .top_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        println!(
            "  {}: {}",
            doc.label.if_supports_color(Stream::Stdout, |t| t.cyan()),
            words.join(", ")
        );
    }

    Ok(())
}
