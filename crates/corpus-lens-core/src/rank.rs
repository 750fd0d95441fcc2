//! Rank–frequency (Zipf) curves.
//!
//! Each curve pairs a document's descending word counts with ranks 1..N,
//! ready for log–log axes. Every emitted frequency is at least 1.

use serde::Serialize;

use crate::corpus::Corpus;
use crate::error::CorpusResult;

/// Default number of ranks per curve.
pub const DEFAULT_MAX_RANK: usize = 50;

/// One point on a rank–frequency curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankPoint {
    /// 1-based rank.
    pub rank: usize,
    /// Count of the word at that rank.
    pub frequency: usize,
}

/// The curve for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankFrequencyCurve {
    /// Document label.
    pub label: String,
    /// Points ordered by rank.
    pub points: Vec<RankPoint>,
}

impl RankFrequencyCurve {
    /// `(log10 rank, log10 frequency)` for each point.
    pub fn log_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .map(|p| ((p.rank as f64).log10(), (p.frequency as f64).log10()))
    }
}

/// Build one curve per document, truncated to `max_rank` points.
///
/// Documents with an empty vocabulary produce no curve. Equal counts keep
/// the order in which their words first appeared.
#[tracing::instrument(skip(corpus), fields(documents = corpus.len()))]
pub fn rank_frequency(corpus: &Corpus, max_rank: usize) -> CorpusResult<Vec<RankFrequencyCurve>> {
    corpus.require_documents("rank_frequency")?;

    let curves = corpus
        .iter()
        .filter(|record| !record.word_freq.is_empty())
        .map(|record| {
            let points = record
                .word_freq
                .sorted_counts()
                .into_iter()
                .filter(|&count| count > 0)
                .take(max_rank)
                .enumerate()
                .map(|(i, frequency)| RankPoint {
                    rank: i + 1,
                    frequency,
                })
                .collect();
            RankFrequencyCurve {
                label: record.label.clone(),
                points,
            }
        })
        .collect();

    Ok(curves)
}
