//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use corpus_lens_core::config::{Config, ConfigSources, resolve_relative};
use corpus_lens_core::{Corpus, ParserKind};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

pub mod flow;
pub mod grid;
pub mod info;
pub mod rank;
pub mod summary;

/// A document named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSpec {
    /// Label to store the document under.
    pub label: String,
    /// File to read.
    pub path: Utf8PathBuf,
}

/// Parse `LABEL=PATH`, or a bare `PATH` labeled by its file stem.
pub fn parse_doc_spec(s: &str) -> Result<DocSpec, String> {
    if let Some((label, path)) = s.split_once('=') {
        if label.trim().is_empty() || path.is_empty() {
            return Err(format!("expected LABEL=PATH, got {s:?}"));
        }
        return Ok(DocSpec {
            label: label.to_string(),
            path: Utf8PathBuf::from(path),
        });
    }

    let path = Utf8PathBuf::from(s);
    let label = path
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| format!("cannot derive a label from {s:?}; use LABEL=PATH"))?
        .to_string();
    Ok(DocSpec { label, path })
}

/// Corpus arguments shared by every analysis command.
#[derive(Args, Debug, Default)]
pub struct CorpusArgs {
    /// Documents to load, as LABEL=PATH or PATH (label = file stem).
    /// Falls back to `documents` in config.
    #[arg(value_name = "DOC", value_parser = parse_doc_spec)]
    pub docs: Vec<DocSpec>,

    /// Stopword file, one word per line.
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<Utf8PathBuf>,

    /// How documents are parsed.
    #[arg(long, value_enum)]
    pub parser: Option<ParserKind>,
}

/// Settings that shape how a corpus is loaded.
#[derive(Debug, Clone, Copy)]
pub struct LoadContext<'a> {
    /// Merged configuration.
    pub config: &'a Config,
    /// Where the configuration came from.
    pub sources: &'a ConfigSources,
    /// Draw a progress bar on stderr.
    pub show_progress: bool,
}

/// Build a corpus from command-line documents, or config documents if none were given.
pub fn load_corpus(args: &CorpusArgs, ctx: LoadContext<'_>) -> anyhow::Result<Corpus> {
    let config_dir = ctx.sources.config_dir().unwrap_or_else(|| Utf8Path::new("."));
    let mut corpus = Corpus::new().with_max_input_bytes(ctx.config.input_limit());

    let stopwords = args.stopwords.clone().or_else(|| {
        ctx.config
            .stopwords
            .as_deref()
            .map(|p| resolve_relative(p, config_dir))
    });
    if let Some(path) = stopwords {
        corpus
            .load_stopwords(&path)
            .with_context(|| format!("failed to load stop words from {path}"))?;
    }

    let docs: Vec<DocSpec> = if args.docs.is_empty() {
        ctx.config
            .documents
            .iter()
            .flatten()
            .map(|d| DocSpec {
                label: d.label.clone(),
                path: d.resolve(config_dir),
            })
            .collect()
    } else {
        args.docs.clone()
    };
    if docs.is_empty() {
        warn!("no documents given on the command line or in config");
    }

    let kind = args.parser.unwrap_or(ctx.config.parser);
    let parser = kind.parser(ctx.config.input_limit());
    debug!(documents = docs.len(), parser = %kind, "loading corpus");

    let progress = if ctx.show_progress && docs.len() > 1 {
        let bar = ProgressBar::new(docs.len() as u64);
        bar.set_style(ProgressStyle::with_template(
            "{spinner} [{bar:30}] {pos}/{len} {msg}",
        )?);
        bar
    } else {
        ProgressBar::hidden()
    };

    for doc in &docs {
        progress.set_message(doc.label.clone());
        match parser.as_deref() {
            Some(p) => corpus.load_with(&doc.path, &doc.label, p),
            None => corpus.load(&doc.path, &doc.label),
        }
        .with_context(|| format!("failed to load {} as \"{}\"", doc.path, doc.label))?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(corpus)
}
