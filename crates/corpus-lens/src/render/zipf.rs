//! Log–log rank–frequency plots for the terminal.

use std::fmt::Write as _;

use corpus_lens_core::RankFrequencyCurve;

/// Markers assigned to curves in order; reused when there are more curves.
const MARKERS: [char; 8] = ['*', 'o', '+', 'x', '#', '@', '%', '&'];

/// Plot dimensions in character cells.
#[derive(Debug, Clone, Copy)]
pub struct PlotSize {
    /// Plot area columns.
    pub width: usize,
    /// Plot area rows.
    pub height: usize,
}

impl Default for PlotSize {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
        }
    }
}

/// Overlay every curve on shared log–log axes, with a legend.
pub fn draw_overlay(curves: &[RankFrequencyCurve], size: PlotSize) -> String {
    let width = size.width.max(2);
    let height = size.height.max(2);

    let (max_x, max_y) = curves
        .iter()
        .flat_map(RankFrequencyCurve::log_points)
        .fold((0.0_f64, 0.0_f64), |(mx, my), (x, y)| (mx.max(x), my.max(y)));
    // a single rank or frequency collapses the axis; give it some extent
    let max_x = if max_x > 0.0 { max_x } else { 1.0 };
    let max_y = if max_y > 0.0 { max_y } else { 1.0 };

    let mut canvas = vec![vec![' '; width]; height];
    for (i, curve) in curves.iter().enumerate() {
        let marker = MARKERS[i % MARKERS.len()];
        for (x, y) in curve.log_points() {
            let col = cell(x, max_x, width);
            let row = height - 1 - cell(y, max_y, height);
            canvas[row][col] = marker;
        }
    }

    let top_frequency = curves
        .iter()
        .flat_map(|c| c.points.iter().map(|p| p.frequency))
        .max()
        .unwrap_or(1);
    let top_rank = curves
        .iter()
        .flat_map(|c| c.points.iter().map(|p| p.rank))
        .max()
        .unwrap_or(1);

    let top_label = top_frequency.to_string();
    let gutter = top_label.len().max(1);

    let mut out = String::new();
    let _ = writeln!(out, "{:>gutter$}  Frequency (log scale)", "");
    for (row, line) in canvas.iter().enumerate() {
        let axis_label = match row {
            0 => top_label.clone(),
            r if r == height - 1 => "1".to_string(),
            _ => String::new(),
        };
        let line: String = line.iter().collect();
        let _ = writeln!(out, "{axis_label:>gutter$} │{}", line.trim_end());
    }
    let _ = writeln!(out, "{:>gutter$} └{}", "", "─".repeat(width));
    let right_label = top_rank.to_string();
    let _ = writeln!(
        out,
        "{:>gutter$}  1{}{right_label}",
        "",
        " ".repeat(width.saturating_sub(1 + right_label.len())),
    );
    let _ = writeln!(out, "{:>gutter$}  Rank (log scale)", "");

    out.push('\n');
    for (i, curve) in curves.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {} {} ({} ranks)",
            MARKERS[i % MARKERS.len()],
            curve.label,
            curve.points.len()
        );
    }
    out
}

/// Map `value` in `[0, max]` to a cell index in `[0, cells)`.
fn cell(value: f64, max: f64, cells: usize) -> usize {
    let scaled = (value / max * (cells - 1) as f64).round();
    (scaled.max(0.0) as usize).min(cells - 1)
}

/// Tabulate curves as `label  rank  frequency` rows.
pub fn draw_table(curves: &[RankFrequencyCurve]) -> String {
    let label_width = curves
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Document".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<label_width$}  {:>5}  {:>9}", "Document", "Rank", "Frequency");
    for curve in curves {
        for point in &curve.points {
            let _ = writeln!(
                out,
                "{:<label_width$}  {:>5}  {:>9}",
                curve.label, point.rank, point.frequency
            );
        }
    }
    out
}
