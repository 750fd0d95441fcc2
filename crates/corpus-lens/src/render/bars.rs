//! Terminal bar charts for the top-words grid.

use std::fmt::Write as _;

use corpus_lens_core::{GridCell, TopWordsChart, TopWordsGrid};
use owo_colors::{OwoColorize, Stream};

/// Draw every cell of the grid, row by row.
///
/// Blank cells are skipped. `width` is the length of the
/// longest possible bar.
pub fn draw_grid(grid: &TopWordsGrid, width: usize) -> String {
    let mut out = String::new();
    for row in 0..grid.rows {
        for col in 0..grid.columns {
            match grid.cell(row, col) {
                Some(GridCell::Chart(chart)) => {
                    let _ = writeln!(out, "[{},{}] {}", row + 1, col + 1, draw_chart(chart, width));
                }
                Some(GridCell::Blank) | None => {}
            }
        }
    }
    out
}

/// Draw one horizontal bar chart with an integer count axis.
pub fn draw_chart(chart: &TopWordsChart, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        chart.label.if_supports_color(Stream::Stdout, |t| t.bold())
    );

    let label_width = chart
        .bars
        .iter()
        .map(|b| b.word.chars().count())
        .max()
        .unwrap_or(0);
    let axis_max = chart.y_ticks.last().copied().unwrap_or(0).max(1);

    for bar in &chart.bars {
        let len = scale(bar.count, axis_max, width);
        let bar_str = "█".repeat(len.max(1));
        let _ = writeln!(
            out,
            "  {:>label_width$} │{} {}",
            bar.word,
            bar_str.if_supports_color(Stream::Stdout, |t| t.cyan()),
            bar.count,
        );
    }

    let _ = writeln!(out, "  {:>label_width$} └{}", "", "─".repeat(width + 1));
    let _ = writeln!(out, "  {:>label_width$}  {}", "", tick_labels(&chart.y_ticks, axis_max, width));
    out
}

fn scale(value: usize, max: usize, width: usize) -> usize {
    (value * width).div_ceil(max).min(width)
}

/// Place each tick label under its position on the axis.
fn tick_labels(ticks: &[usize], axis_max: usize, width: usize) -> String {
    let mut line = String::new();
    for &tick in ticks {
        let pos = scale(tick, axis_max, width);
        let current = line.chars().count();
        // labels that would overlap the previous one are dropped
        if pos > current || current == 0 {
            line.push_str(&" ".repeat(pos.saturating_sub(current)));
            line.push_str(&tick.to_string());
        }
    }
    line
}
