//! Trend-strength category: ADX bands plus DI direction. Labels live in
//! their own strong/moderate/weak space, not the bullish/bearish one.

use super::ScoreCard;
use crate::types::{AnnotatedBar, CategoryScore, TrendStrengthLabel};

/// Score the trend-strength category from the latest snapshot.
pub fn score(cur: &AnnotatedBar, _prev: &AnnotatedBar) -> CategoryScore<TrendStrengthLabel> {
    let mut card = ScoreCard::new();

    if let Some(adx) = cur.ind.adx14 {
        if adx > 40.0 {
            card.hit(2, format!("ADX ({:.2}) - very strong trend", adx));
        } else if adx > 25.0 {
            card.hit(1, format!("ADX ({:.2}) - strong trend", adx));
        } else if adx > 20.0 {
            card.info(format!("ADX ({:.2}) - developing trend", adx));
        } else {
            card.hit(-1, format!("ADX ({:.2}) - weak trend / ranging market", adx));
        }
    }

    if let (Some(plus_di), Some(minus_di)) = (cur.ind.plus_di, cur.ind.minus_di) {
        if plus_di > minus_di {
            card.hit(1, "+DI above -DI - upward pressure");
        } else {
            card.hit(-1, "-DI above +DI - downward pressure");
        }
    }

    let (score, signals) = card.fold();
    CategoryScore {
        score,
        signals,
        direction: TrendStrengthLabel::from_score(score),
    }
}
