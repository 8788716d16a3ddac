//! The signal-scoring engine.
//!
//! Consumes the annotated bar table and produces an [`AnalysisResult`]:
//! five independent category scores, an overall call blended from the three
//! directional categories, and the recommendation list. Everything is
//! recomputed from the full history on every call; there is no incremental
//! state.

pub mod momentum;
pub mod overall;
pub mod rounding;
pub mod trend;
pub mod trend_strength;
pub mod volatility;
pub mod volume;

use chrono::Utc;
use thiserror::Error;

use crate::types::{AnalysisResult, AnnotatedBar, CategorySignals};
use self::rounding::round2;

/// Minimum bars required before any score is computed.
pub const MIN_BARS: usize = 50;

/// Engine-level error conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Expected for recently listed tickers; the caller reports it and no
    /// scores are produced.
    #[error("insufficient history: {available} bars available, {} required", MIN_BARS)]
    InsufficientHistory { available: usize },
}

/// One rule outcome: a score delta and the signal string explaining it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RuleHit {
    pub delta: i64,
    pub message: String,
}

/// Accumulates rule hits for one category, keeping the score arithmetic
/// separate from the signal text until folded.
#[derive(Debug, Default)]
pub(crate) struct ScoreCard {
    hits: Vec<RuleHit>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scoring rule outcome.
    pub fn hit(&mut self, delta: i64, message: impl Into<String>) {
        self.hits.push(RuleHit {
            delta,
            message: message.into(),
        });
    }

    /// Record an informational signal with no score contribution.
    pub fn info(&mut self, message: impl Into<String>) {
        self.hit(0, message);
    }

    /// Fold the hits into the final score and ordered signal list.
    pub fn fold(self) -> (i64, Vec<String>) {
        let score = self.hits.iter().map(|h| h.delta).sum();
        let signals = self.hits.into_iter().map(|h| h.message).collect();
        (score, signals)
    }
}

/// Run the five category scorers over the latest snapshot pair and blend
/// the directional categories into the overall call.
pub fn analyze(ticker: &str, table: &[AnnotatedBar]) -> Result<AnalysisResult, EngineError> {
    if table.len() < MIN_BARS {
        return Err(EngineError::InsufficientHistory {
            available: table.len(),
        });
    }

    let cur = &table[table.len() - 1];
    let prev = &table[table.len() - 2];

    let signals = CategorySignals {
        trend: trend::score(cur, prev),
        momentum: momentum::score(cur, prev),
        volatility: volatility::score(cur, prev),
        volume: volume::score(cur, prev),
        trend_strength: trend_strength::score(cur, prev),
    };

    let summary = overall::summarize(
        signals.trend.score,
        signals.momentum.score,
        signals.volume.score,
    );
    let recommendations = overall::recommendations(ticker, cur.bar.close, &summary, &cur.ind);

    Ok(AnalysisResult {
        ticker: ticker.to_string(),
        timestamp: Utc::now(),
        price: round2(cur.bar.close),
        signals,
        summary,
        recommendations,
    })
}
