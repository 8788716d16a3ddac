//! Overall blend and recommendation composer.
//!
//! Blends the three directional categories; volatility and trend strength
//! are deliberately excluded, they qualify the call rather than move it.

use super::rounding::round2;
use crate::types::{
    Confidence, IndicatorSnapshot, OverallLabel, OverallSummary, Recommendation,
    RecommendationKind,
};

/// Derive the overall call from the three directional category scores.
pub fn summarize(trend: i64, momentum: i64, volume: i64) -> OverallSummary {
    let blended = (trend + momentum + volume) as f64 / 3.0;
    let (overall, action) = OverallLabel::from_blended(blended);

    OverallSummary {
        overall,
        action: action.to_string(),
        score: round2(blended),
        confidence: Confidence::from_blended(blended),
    }
}

/// Build the ordered recommendation list. Entries are appended
/// conditionally and never removed.
pub fn recommendations(
    ticker: &str,
    price: f64,
    summary: &OverallSummary,
    snap: &IndicatorSnapshot,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if summary.action.contains("SELL") {
        recs.push(Recommendation {
            kind: RecommendationKind::Warning,
            text: format!(
                "Consider reducing the position or setting a tight stop-loss for {}",
                ticker
            ),
        });
    } else if summary.action.contains("BUY") {
        recs.push(Recommendation {
            kind: RecommendationKind::Opportunity,
            text: format!(
                "{} shows bullish signals - consider accumulating on pullbacks",
                ticker
            ),
        });
    }

    if let (Some(lower), Some(upper)) = (snap.bb_lower, snap.bb_upper) {
        let entry_high = snap.sma20.unwrap_or(lower * 1.02);
        recs.push(Recommendation {
            kind: RecommendationKind::Info,
            text: format!("Entry zone: {:.0} - {:.0}", lower, entry_high),
        });
        recs.push(Recommendation {
            kind: RecommendationKind::Info,
            text: format!("Resistance zone: {:.0} - {:.0}", upper, upper * 1.02),
        });
    }

    if let Some(atr) = snap.atr14 {
        let stop_loss = price - 2.0 * atr;
        recs.push(Recommendation {
            kind: RecommendationKind::Risk,
            text: format!(
                "Suggested stop-loss: {:.0} (2x ATR below current price)",
                stop_loss
            ),
        });
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_is_exact_three_way_average() {
        let summary = summarize(3, 2, 1);
        assert_eq!(summary.score, 2.0);
        assert_eq!(summary.overall, OverallLabel::StrongBullish);
        assert_eq!(summary.action, "BUY");
        assert_eq!(summary.confidence, Confidence::High);
    }

    #[test]
    fn test_neutral_band() {
        let summary = summarize(1, -1, 0);
        assert_eq!(summary.score, 0.0);
        assert_eq!(summary.overall, OverallLabel::Neutral);
        assert_eq!(summary.action, "HOLD / WAIT");
        assert_eq!(summary.confidence, Confidence::Low);
    }

    #[test]
    fn test_slightly_bearish_band() {
        // (-1 + -1 + 0) / 3 = -0.67.
        let summary = summarize(-1, -1, 0);
        assert_eq!(summary.overall, OverallLabel::SlightlyBearish);
        assert_eq!(summary.action, "HOLD / REDUCE");
        assert_eq!(summary.confidence, Confidence::Medium);
        assert_eq!(summary.score, -0.67);
    }

    #[test]
    fn test_strong_bearish_gets_warning() {
        let summary = summarize(-3, -2, -2);
        assert_eq!(summary.action, "SELL");

        let recs = recommendations("BBRI.JK", 5000.0, &summary, &IndicatorSnapshot::default());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::Warning);
        assert!(recs[0].text.contains("BBRI.JK"));
    }

    #[test]
    fn test_hold_reduce_is_not_a_sell() {
        // "HOLD / REDUCE" must not trip the SELL warning.
        let summary = summarize(-1, -1, 0);
        let recs = recommendations("TLKM.JK", 3000.0, &summary, &IndicatorSnapshot::default());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_full_recommendation_ordering() {
        let summary = summarize(3, 2, 1);
        let snap = IndicatorSnapshot {
            bb_lower: Some(4_800.0),
            bb_upper: Some(5_200.0),
            sma20: Some(4_950.0),
            atr14: Some(75.0),
            ..Default::default()
        };

        let recs = recommendations("BBCA.JK", 5_000.0, &summary, &snap);
        let kinds: Vec<RecommendationKind> = recs.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationKind::Opportunity,
                RecommendationKind::Info,
                RecommendationKind::Info,
                RecommendationKind::Risk,
            ]
        );
        assert!(recs[1].text.contains("Entry zone: 4800 - 4950"));
        assert!(recs[2].text.contains("Resistance zone: 5200 - 5304"));
        assert!(recs[3].text.contains("stop-loss: 4850"));
    }

    #[test]
    fn test_entry_zone_falls_back_without_sma20() {
        let summary = summarize(0, 0, 0);
        let snap = IndicatorSnapshot {
            bb_lower: Some(100.0),
            bb_upper: Some(120.0),
            ..Default::default()
        };

        let recs = recommendations("X.JK", 110.0, &summary, &snap);
        assert!(recs[0].text.contains("Entry zone: 100 - 102"));
    }
}
