//! Grid command: one top-words bar chart per document.

use anyhow::Context;
use clap::Args;
use corpus_lens_core::top_words_grid;
use tracing::{debug, instrument};

use super::{CorpusArgs, LoadContext, load_corpus};
use crate::render::bars;

/// Arguments for the `grid` subcommand.
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Documents and loading options.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Bars per chart.
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Longest bar, in terminal columns.
    #[arg(long, default_value_t = 40)]
    pub width: usize,
}

/// Lay out the top-words grid and draw it.
#[instrument(name = "cmd_grid", skip_all)]
pub fn cmd_grid(args: GridArgs, global_json: bool, ctx: LoadContext<'_>) -> anyhow::Result<()> {
    let top_n = args.top_n.unwrap_or(ctx.config.top_n);
    debug!(top_n, width = args.width, "executing grid command");

    let corpus = load_corpus(&args.corpus, ctx)?;
    let grid = top_words_grid(&corpus, top_n).context("failed to lay out top-words grid")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        print!("{}", bars::draw_grid(&grid, args.width.max(1)));
    }
    Ok(())
}
