use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction label derived from a category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

impl Direction {
    /// Derive the label from an accumulated category score.
    pub fn from_score(score: i64) -> Self {
        if score > 0 {
            Direction::Bullish
        } else if score < 0 {
            Direction::Bearish
        } else {
            Direction::Neutral
        }
    }
}

/// Volatility label space. Negative scores mean the band-breakout rules
/// fired on the high side, so the meaning is inverted relative to the
/// bullish/bearish scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityLevel {
    HighVolatility,
    LowVolatility,
    Normal,
}

impl VolatilityLevel {
    pub fn from_score(score: i64) -> Self {
        if score < 0 {
            VolatilityLevel::HighVolatility
        } else if score > 0 {
            VolatilityLevel::LowVolatility
        } else {
            VolatilityLevel::Normal
        }
    }
}

/// Trend-strength label space (ADX/DI category). Distinct from the
/// bullish/bearish scheme used by the directional categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStrengthLabel {
    Strong,
    Moderate,
    Weak,
}

impl TrendStrengthLabel {
    pub fn from_score(score: i64) -> Self {
        if score > 1 {
            TrendStrengthLabel::Strong
        } else if score < 0 {
            TrendStrengthLabel::Weak
        } else {
            TrendStrengthLabel::Moderate
        }
    }
}

/// Score and signal strings for one analysis category.
///
/// The direction label is always a pure function of the score; it is stored
/// alongside it only so the serialized result is self-describing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore<D> {
    pub score: i64,
    pub signals: Vec<String>,
    pub direction: D,
}

/// The five category scores, serialized under their fixed field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySignals {
    pub trend: CategoryScore<Direction>,
    pub momentum: CategoryScore<Direction>,
    pub volatility: CategoryScore<VolatilityLevel>,
    pub volume: CategoryScore<Direction>,
    pub trend_strength: CategoryScore<TrendStrengthLabel>,
}

/// Overall call label, strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallLabel {
    #[serde(rename = "STRONG BULLISH")]
    StrongBullish,
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "SLIGHTLY BULLISH")]
    SlightlyBullish,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "SLIGHTLY BEARISH")]
    SlightlyBearish,
    #[serde(rename = "BEARISH")]
    Bearish,
    #[serde(rename = "STRONG BEARISH")]
    StrongBearish,
}

impl OverallLabel {
    /// Map a blended score to (label, action). Thresholds are checked in
    /// strict priority order; first match wins.
    pub fn from_blended(blended: f64) -> (Self, &'static str) {
        if blended >= 2.0 {
            (OverallLabel::StrongBullish, "BUY")
        } else if blended >= 1.0 {
            (OverallLabel::Bullish, "BUY / HOLD")
        } else if blended >= 0.5 {
            (OverallLabel::SlightlyBullish, "HOLD / ACCUMULATE")
        } else if blended <= -2.0 {
            (OverallLabel::StrongBearish, "SELL")
        } else if blended <= -1.0 {
            (OverallLabel::Bearish, "SELL / AVOID")
        } else if blended <= -0.5 {
            (OverallLabel::SlightlyBearish, "HOLD / REDUCE")
        } else {
            (OverallLabel::Neutral, "HOLD / WAIT")
        }
    }
}

/// Confidence in the overall call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_blended(blended: f64) -> Self {
        if blended.abs() > 1.5 {
            Confidence::High
        } else if blended.abs() > 0.5 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// The blended overall call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSummary {
    pub overall: OverallLabel,
    pub action: String,
    /// Blended score `(trend + momentum + volume) / 3`, rounded to 2 dp.
    pub score: f64,
    pub confidence: Confidence,
}

/// Kind of a recommendation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Warning,
    Opportunity,
    Info,
    Risk,
}

/// One human-readable recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub text: String,
}

/// Complete analysis output for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    /// Last close, rounded to 2 dp.
    pub price: f64,
    pub signals: CategorySignals,
    pub summary: OverallSummary,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_score() {
        assert_eq!(Direction::from_score(3), Direction::Bullish);
        assert_eq!(Direction::from_score(-1), Direction::Bearish);
        assert_eq!(Direction::from_score(0), Direction::Neutral);
    }

    #[test]
    fn test_volatility_level_is_inverted() {
        assert_eq!(VolatilityLevel::from_score(-1), VolatilityLevel::HighVolatility);
        assert_eq!(VolatilityLevel::from_score(1), VolatilityLevel::LowVolatility);
        assert_eq!(VolatilityLevel::from_score(0), VolatilityLevel::Normal);
    }

    #[test]
    fn test_trend_strength_label_boundaries() {
        assert_eq!(TrendStrengthLabel::from_score(3), TrendStrengthLabel::Strong);
        assert_eq!(TrendStrengthLabel::from_score(2), TrendStrengthLabel::Strong);
        assert_eq!(TrendStrengthLabel::from_score(1), TrendStrengthLabel::Moderate);
        assert_eq!(TrendStrengthLabel::from_score(0), TrendStrengthLabel::Moderate);
        assert_eq!(TrendStrengthLabel::from_score(-1), TrendStrengthLabel::Weak);
    }

    #[test]
    fn test_overall_label_priority_order() {
        assert_eq!(
            OverallLabel::from_blended(2.0),
            (OverallLabel::StrongBullish, "BUY")
        );
        assert_eq!(
            OverallLabel::from_blended(1.0),
            (OverallLabel::Bullish, "BUY / HOLD")
        );
        assert_eq!(
            OverallLabel::from_blended(0.5),
            (OverallLabel::SlightlyBullish, "HOLD / ACCUMULATE")
        );
        assert_eq!(
            OverallLabel::from_blended(-2.0),
            (OverallLabel::StrongBearish, "SELL")
        );
        assert_eq!(
            OverallLabel::from_blended(-1.0),
            (OverallLabel::Bearish, "SELL / AVOID")
        );
        assert_eq!(
            OverallLabel::from_blended(-0.5),
            (OverallLabel::SlightlyBearish, "HOLD / REDUCE")
        );
        assert_eq!(
            OverallLabel::from_blended(0.2),
            (OverallLabel::Neutral, "HOLD / WAIT")
        );
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(Confidence::from_blended(2.0), Confidence::High);
        assert_eq!(Confidence::from_blended(-1.6), Confidence::High);
        assert_eq!(Confidence::from_blended(1.5), Confidence::Medium);
        assert_eq!(Confidence::from_blended(0.6), Confidence::Medium);
        assert_eq!(Confidence::from_blended(0.5), Confidence::Low);
        assert_eq!(Confidence::from_blended(0.0), Confidence::Low);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(
            serde_json::to_string(&OverallLabel::StrongBullish).unwrap(),
            "\"STRONG BULLISH\""
        );
        assert_eq!(
            serde_json::to_string(&VolatilityLevel::HighVolatility).unwrap(),
            "\"high_volatility\""
        );
        assert_eq!(
            serde_json::to_string(&Direction::Bullish).unwrap(),
            "\"bullish\""
        );
    }

    #[test]
    fn test_recommendation_kind_serializes_as_type() {
        let rec = Recommendation {
            kind: RecommendationKind::Risk,
            text: "Suggested stop-loss: 95".to_string(),
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"type\":\"risk\""));
        assert!(json.contains("\"text\""));
    }
}
