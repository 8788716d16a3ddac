//! Volatility category: Bollinger band position, squeeze detection, and
//! ATR as a percentage of price. Only the band-breakout rules move the
//! score; everything else is informational.

use super::ScoreCard;
use crate::types::{AnnotatedBar, CategoryScore, VolatilityLevel};

/// Band width below this (absolute units) flags a squeeze.
const SQUEEZE_WIDTH: f64 = 5.0;

/// Score the volatility category from the latest snapshot.
pub fn score(cur: &AnnotatedBar, _prev: &AnnotatedBar) -> CategoryScore<VolatilityLevel> {
    let price = cur.bar.close;
    let mut card = ScoreCard::new();

    if let (Some(upper), Some(lower)) = (cur.ind.bb_upper, cur.ind.bb_lower) {
        let range = upper - lower;
        // A degenerate band defaults to the middle.
        let position = if range > 0.0 {
            (price - lower) / range
        } else {
            0.5
        };

        if price > upper {
            card.hit(-1, "Price above upper Bollinger band - overextended");
        } else if price < lower {
            card.hit(1, "Price below lower Bollinger band - oversold");
        } else if position > 0.8 {
            card.info(format!(
                "Price near upper Bollinger band (position {:.2}%)",
                position * 100.0
            ));
        } else if position < 0.2 {
            card.info(format!(
                "Price near lower Bollinger band (position {:.2}%)",
                position * 100.0
            ));
        } else {
            card.info(format!(
                "Price within Bollinger bands (position {:.2}%)",
                position * 100.0
            ));
        }
    }

    if let Some(width) = cur.ind.bb_width {
        if width < SQUEEZE_WIDTH {
            card.info(format!(
                "Bollinger squeeze (band width {:.0}) - potential breakout",
                width
            ));
        }
    }

    if let Some(atr) = cur.ind.atr14 {
        let atr_pct = (atr / price) * 100.0;
        if atr_pct > 3.0 {
            card.info(format!("High volatility - ATR {:.2}% of price", atr_pct));
        } else if atr_pct < 1.0 {
            card.info(format!("Low volatility - ATR {:.2}% of price", atr_pct));
        } else {
            card.info(format!("Normal volatility - ATR {:.2}% of price", atr_pct));
        }
    }

    let (score, signals) = card.fold();
    CategoryScore {
        score,
        signals,
        direction: VolatilityLevel::from_score(score),
    }
}
