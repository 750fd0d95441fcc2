//! Logging setup: stderr output plus an optional log file.
//!
//! Console output honors `RUST_LOG`, then `--quiet`/`--verbose`, then the
//! configured log level. A file layer is added only when a log location is
//! named by `CORPUS_LENS_LOG_PATH`, `CORPUS_LENS_LOG_DIR`, or `log_dir` in
//! config.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "CORPUS_LENS_LOG_PATH";
const LOG_DIR_ENV: &str = "CORPUS_LENS_LOG_DIR";
const LOG_FILE_PREFIX: &str = "corpus-lens.log";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file; takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to `config_log_dir` for the directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from), config_log_dir)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |p: PathBuf| (!p.as_os_str().is_empty()).then_some(p);
        Self {
            log_path: lookup(LOG_PATH_ENV).and_then(non_empty),
            log_dir: lookup(LOG_DIR_ENV).and_then(non_empty).or(config_log_dir),
        }
    }
}

/// Build the console filter.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file logs flush.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false);

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let file = path
            .file_name()
            .with_context(|| format!("log path {} has no file name", path.display()))?;
        create_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::never(dir, file)));
    }
    if let Some(ref dir) = config.log_dir {
        create_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)));
    }
    Ok(None)
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
