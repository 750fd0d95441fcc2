//! Rank command: Zipf curves for every document.

use anyhow::Context;
use clap::Args;
use corpus_lens_core::rank_frequency;
use tracing::{debug, instrument, warn};

use super::{CorpusArgs, LoadContext, load_corpus};
use crate::render::zipf::{self, PlotSize};

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Documents and loading options.
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Highest rank plotted per document.
    #[arg(long, value_name = "N")]
    pub max_rank: Option<usize>,

    /// Print a rank/frequency table instead of a plot.
    #[arg(long)]
    pub table: bool,

    /// Plot width in terminal columns.
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height in terminal rows.
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Compute rank–frequency curves and plot them.
#[instrument(name = "cmd_rank", skip_all)]
pub fn cmd_rank(args: RankArgs, global_json: bool, ctx: LoadContext<'_>) -> anyhow::Result<()> {
    let max_rank = args.max_rank.unwrap_or(ctx.config.max_rank);
    debug!(max_rank, table = args.table, "executing rank command");

    let corpus = load_corpus(&args.corpus, ctx)?;
    let curves = rank_frequency(&corpus, max_rank).context("failed to compute rank-frequency curves")?;
    if curves.len() < corpus.len() {
        warn!(
            skipped = corpus.len() - curves.len(),
            "documents with no words after stopword removal were left out"
        );
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&curves)?);
    } else if args.table {
        print!("{}", zipf::draw_table(&curves));
    } else {
        let size = PlotSize {
            width: args.width,
            height: args.height,
        };
        println!("Zipf's Law: Rank vs Frequency (log-log)");
        print!("{}", zipf::draw_overlay(&curves, size));
    }
    Ok(())
}
