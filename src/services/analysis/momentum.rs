//! Momentum category: RSI bands and divergence, MACD against its signal
//! line, histogram zero-cross, and stochastic bands.

use super::ScoreCard;
use crate::types::{AnnotatedBar, CategoryScore, Direction};

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;
const STOCH_OVERBOUGHT: f64 = 80.0;
const STOCH_OVERSOLD: f64 = 20.0;

/// Score the momentum category from the latest snapshot pair.
pub fn score(cur: &AnnotatedBar, prev: &AnnotatedBar) -> CategoryScore<Direction> {
    let price = cur.bar.close;
    let prev_close = prev.bar.close;
    let mut card = ScoreCard::new();

    if let Some(rsi) = cur.ind.rsi14 {
        if rsi > RSI_OVERBOUGHT {
            card.hit(
                -2,
                format!("RSI ({:.2}) - OVERBOUGHT zone, potential reversal", rsi),
            );
        } else if rsi < RSI_OVERSOLD {
            card.hit(
                2,
                format!("RSI ({:.2}) - OVERSOLD zone, potential bounce", rsi),
            );
        } else if rsi > 60.0 {
            card.hit(1, format!("RSI ({:.2}) - bullish momentum", rsi));
        } else if rsi < 40.0 {
            card.hit(-1, format!("RSI ({:.2}) - bearish momentum", rsi));
        } else {
            card.info(format!("RSI ({:.2}) - neutral zone", rsi));
        }

        // One-bar divergence: price and RSI disagreeing on direction.
        if let Some(prev_rsi) = prev.ind.rsi14 {
            if price > prev_close && rsi < prev_rsi {
                card.hit(-1, "Bearish RSI divergence detected");
            } else if price < prev_close && rsi > prev_rsi {
                card.hit(1, "Bullish RSI divergence detected");
            }
        }
    }

    if let (Some(macd), Some(signal)) = (cur.ind.macd, cur.ind.macd_signal) {
        if macd > signal {
            card.hit(1, "MACD above signal line - bullish");
        } else {
            card.hit(-1, "MACD below signal line - bearish");
        }

        // Strict sign change of the histogram between adjacent bars.
        if let (Some(hist), Some(prev_hist)) = (cur.ind.macd_hist, prev.ind.macd_hist) {
            if prev_hist < 0.0 && hist > 0.0 {
                card.hit(2, "Bullish MACD crossover - buy signal");
            } else if prev_hist > 0.0 && hist < 0.0 {
                card.hit(-2, "Bearish MACD crossover - sell signal");
            }
        }
    }

    // Histogram sign on its own is informational; the crossover rule above
    // already carries the score.
    if let Some(hist) = cur.ind.macd_hist {
        if hist > 0.0 {
            card.info(format!("MACD histogram positive ({:.4})", hist));
        } else if hist < 0.0 {
            card.info(format!("MACD histogram negative ({:.4})", hist));
        } else {
            card.info("MACD histogram flat (0.0000)");
        }
    }

    if let Some(k) = cur.ind.stoch_k {
        if k > STOCH_OVERBOUGHT {
            card.hit(-1, format!("Stochastic %K ({:.2}) - overbought", k));
        } else if k < STOCH_OVERSOLD {
            card.hit(1, format!("Stochastic %K ({:.2}) - oversold", k));
        }
        if let Some(d) = cur.ind.stoch_d {
            if k > d {
                card.info("Stochastic %K above %D");
            } else {
                card.info("Stochastic %K below %D");
            }
        }
    }

    let (score, signals) = card.fold();
    CategoryScore {
        score,
        signals,
        direction: Direction::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bar, IndicatorSnapshot};
    use chrono::NaiveDate;

    fn annotated(close: f64, ind: IndicatorSnapshot) -> AnnotatedBar {
        AnnotatedBar {
            bar: Bar {
                date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1_000_000.0,
            },
            ind,
        }
    }

    #[test]
    fn test_overbought_without_divergence() {
        // Price up and RSI up agree: no divergence on top of the band hit.
        let cur = annotated(
            100.0,
            IndicatorSnapshot {
                rsi14: Some(75.0),
                ..Default::default()
            },
        );
        let prev = annotated(
            99.0,
            IndicatorSnapshot {
                rsi14: Some(72.0),
                ..Default::default()
            },
        );

        let result = score(&cur, &prev);
        assert_eq!(result.score, -2);
        assert!(result.signals.iter().any(|s| s.contains("OVERBOUGHT")));
        assert!(!result.signals.iter().any(|s| s.contains("divergence")));
    }

    #[test]
    fn test_bearish_divergence() {
        // Price up while RSI falls.
        let cur = annotated(
            100.0,
            IndicatorSnapshot {
                rsi14: Some(55.0),
                ..Default::default()
            },
        );
        let prev = annotated(
            99.0,
            IndicatorSnapshot {
                rsi14: Some(58.0),
                ..Default::default()
            },
        );

        let result = score(&cur, &prev);
        assert_eq!(result.score, -1);
        assert!(result
            .signals
            .iter()
            .any(|s| s.contains("Bearish RSI divergence")));
    }

    #[test]
    fn test_divergence_needs_previous_rsi() {
        let cur = annotated(
            100.0,
            IndicatorSnapshot {
                rsi14: Some(55.0),
                ..Default::default()
            },
        );
        let prev = annotated(99.0, IndicatorSnapshot::default());

        let result = score(&cur, &prev);
        assert_eq!(result.score, 0);
        assert!(!result.signals.iter().any(|s| s.contains("divergence")));
    }

    #[test]
    fn test_bullish_macd_crossover() {
        let cur = annotated(
            100.0,
            IndicatorSnapshot {
                macd: Some(0.5),
                macd_signal: Some(0.2),
                macd_hist: Some(0.3),
                ..Default::default()
            },
        );
        let prev = annotated(
            100.0,
            IndicatorSnapshot {
                macd_hist: Some(-0.1),
                ..Default::default()
            },
        );

        let result = score(&cur, &prev);
        // +1 above signal, +2 crossover.
        assert_eq!(result.score, 3);
        assert!(result
            .signals
            .iter()
            .any(|s| s.contains("Bullish MACD crossover")));
        assert!(result
            .signals
            .iter()
            .any(|s| s.contains("histogram positive")));
    }

    #[test]
    fn test_zero_histogram_is_present_but_not_a_cross() {
        // A previous histogram of exactly zero is a defined value and the
        // strict sign change does not fire from it.
        let cur = annotated(
            100.0,
            IndicatorSnapshot {
                macd: Some(0.3),
                macd_signal: Some(0.1),
                macd_hist: Some(0.2),
                ..Default::default()
            },
        );
        let prev = annotated(
            100.0,
            IndicatorSnapshot {
                macd_hist: Some(0.0),
                ..Default::default()
            },
        );

        let result = score(&cur, &prev);
        assert_eq!(result.score, 1);
        assert!(!result.signals.iter().any(|s| s.contains("crossover")));
    }

    #[test]
    fn test_stochastic_bands_and_info() {
        let cur = annotated(
            100.0,
            IndicatorSnapshot {
                stoch_k: Some(85.0),
                stoch_d: Some(80.0),
                ..Default::default()
            },
        );
        let prev = annotated(100.0, IndicatorSnapshot::default());

        let result = score(&cur, &prev);
        assert_eq!(result.score, -1);
        assert!(result
            .signals
            .iter()
            .any(|s| s.contains("%K above %D")));
    }
}
