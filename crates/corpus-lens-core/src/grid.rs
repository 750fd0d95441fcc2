//! Top-words chart grid.
//!
//! One bar chart per document, laid out two per row. Cells past the last
//! document are [`GridCell::Blank`].

use serde::Serialize;

use crate::corpus::{Corpus, WordCount};
use crate::error::CorpusResult;

/// Default number of bars per chart.
pub const DEFAULT_TOP_N: usize = 7;

/// Charts per grid row.
pub const GRID_COLUMNS: usize = 2;

/// Upper bound on the number of y-axis intervals per chart.
const MAX_TICK_BINS: usize = 5;

/// A rectangular layout of per-document bar charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopWordsGrid {
    /// Always [`GRID_COLUMNS`].
    pub columns: usize,
    /// `ceil(documents / columns)`.
    pub rows: usize,
    /// Row-major cells; `rows * columns` long.
    pub cells: Vec<GridCell>,
}

impl TopWordsGrid {
    /// Cells that contain a chart.
    pub fn charts(&self) -> impl Iterator<Item = &TopWordsChart> {
        self.cells.iter().filter_map(|cell| match cell {
            GridCell::Chart(chart) => Some(chart),
            GridCell::Blank => None,
        })
    }

    /// The cell at `row`, `col`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if col >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + col)
    }
}

/// One grid position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridCell {
    /// A document's chart.
    Chart(TopWordsChart),
    /// Inactive cell; nothing is drawn.
    Blank,
}

/// Bars for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopWordsChart {
    /// Chart title (the document label).
    pub label: String,
    /// Most frequent words, highest count first.
    pub bars: Vec<WordCount>,
    /// Integer y-axis tick positions, starting at 0.
    pub y_ticks: Vec<usize>,
}

/// Lay out the top `top_n` words of every document.
#[tracing::instrument(skip(corpus), fields(documents = corpus.len()))]
pub fn top_words_grid(corpus: &Corpus, top_n: usize) -> CorpusResult<TopWordsGrid> {
    corpus.require_documents("top_words_grid")?;

    let rows = corpus.len().div_ceil(GRID_COLUMNS);
    let mut cells: Vec<GridCell> = corpus
        .iter()
        .map(|record| {
            let bars: Vec<WordCount> = record
                .top_words(top_n)
                .into_iter()
                .map(|(word, count)| WordCount {
                    word: word.to_string(),
                    count,
                })
                .collect();
            let max = bars.first().map_or(0, |b| b.count);
            GridCell::Chart(TopWordsChart {
                label: record.label.clone(),
                bars,
                y_ticks: integer_ticks(max),
            })
        })
        .collect();
    cells.resize(rows * GRID_COLUMNS, GridCell::Blank);

    Ok(TopWordsGrid {
        columns: GRID_COLUMNS,
        rows,
        cells,
    })
}

/// Integer tick positions from 0 covering `max`.
///
/// The step is the smallest of 1, 2, 5, 10, 20, 50, … that keeps the axis
/// within a handful of intervals, so labels never show fractions.
pub fn integer_ticks(max: usize) -> Vec<usize> {
    if max == 0 {
        return vec![0];
    }
    let step = std::iter::successors(Some(1usize), |m| m.checked_mul(10))
        .flat_map(|m| [m, m.saturating_mul(2), m.saturating_mul(5)])
        .find(|&s| max.div_ceil(s) <= MAX_TICK_BINS)
        .unwrap_or(max);
    let top = max.div_ceil(step) * step;
    (0..=top).step_by(step).collect()
}
