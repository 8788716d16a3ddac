//! Volume category: volume against its trailing average, price
//! confirmation, OBV accumulation/distribution, and CMF bands.

use super::ScoreCard;
use crate::types::{AnnotatedBar, CategoryScore, Direction};

const CMF_STRONG: f64 = 0.25;

/// Score the volume category from the latest snapshot pair.
pub fn score(cur: &AnnotatedBar, prev: &AnnotatedBar) -> CategoryScore<Direction> {
    let volume = cur.bar.volume;
    let price = cur.bar.close;
    let prev_close = prev.bar.close;
    let mut card = ScoreCard::new();

    // A non-positive average would make the ratio meaningless; every
    // ratio-based rule is skipped in that case.
    if let Some(avg_volume) = cur.ind.avg_volume20 {
        if avg_volume > 0.0 {
            let ratio = volume / avg_volume;

            if ratio > 2.0 {
                card.hit(
                    2,
                    format!("Volume {:.2}x average - unusually high activity", ratio),
                );
            } else if ratio > 1.5 {
                card.hit(1, format!("Volume {:.2}x average - above normal", ratio));
            } else if ratio < 0.5 {
                card.hit(-1, format!("Volume {:.2}x average - low activity", ratio));
            } else {
                card.info(format!("Volume {:.2}x average - normal", ratio));
            }

            let change = price - prev_close;
            if change > 0.0 && ratio > 1.2 {
                card.hit(1, "Price up on elevated volume - bullish confirmation");
            } else if change < 0.0 && ratio > 1.2 {
                card.hit(-1, "Price down on elevated volume - bearish confirmation");
            }
        }
    }

    if let (Some(obv), Some(obv_avg)) = (cur.ind.obv, cur.ind.obv_sma20) {
        if obv > obv_avg {
            card.hit(1, "OBV above its 20-day average - accumulation");
        } else if obv < obv_avg {
            card.hit(-1, "OBV below its 20-day average - distribution");
        }
    }

    if let Some(cmf) = cur.ind.cmf20 {
        if cmf > CMF_STRONG {
            card.hit(1, format!("CMF ({:.2}) - strong buying pressure", cmf));
        } else if cmf < -CMF_STRONG {
            card.hit(-1, format!("CMF ({:.2}) - strong selling pressure", cmf));
        } else {
            card.info(format!("CMF ({:.2}) - balanced flow", cmf));
        }
    }

    let (score, signals) = card.fold();
    CategoryScore {
        score,
        signals,
        direction: Direction::from_score(score),
    }
}
