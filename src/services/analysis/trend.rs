//! Trend category: price against the moving-average ladder, golden/death
//! cross detection, and EMA alignment.

use super::ScoreCard;
use crate::types::{AnnotatedBar, CategoryScore, Direction};

/// Score the trend category from the latest snapshot pair.
pub fn score(cur: &AnnotatedBar, prev: &AnnotatedBar) -> CategoryScore<Direction> {
    let price = cur.bar.close;
    let mut card = ScoreCard::new();

    if let Some(sma20) = cur.ind.sma20 {
        if price > sma20 {
            card.hit(
                1,
                format!("Price above SMA-20 ({:.0}) - short-term bullish", sma20),
            );
        } else {
            card.hit(
                -1,
                format!("Price below SMA-20 ({:.0}) - short-term bearish", sma20),
            );
        }
    }

    if let Some(sma50) = cur.ind.sma50 {
        if price > sma50 {
            card.hit(
                1,
                format!("Price above SMA-50 ({:.0}) - medium-term bullish", sma50),
            );
        } else {
            card.hit(
                -1,
                format!("Price below SMA-50 ({:.0}) - medium-term bearish", sma50),
            );
        }
    }

    // Long-term trend dominates: double weight.
    if let Some(sma200) = cur.ind.sma200 {
        if price > sma200 {
            card.hit(
                2,
                format!("Price above SMA-200 ({:.0}) - long-term uptrend", sma200),
            );
        } else {
            card.hit(
                -2,
                format!("Price below SMA-200 ({:.0}) - long-term downtrend", sma200),
            );
        }
    }

    // One-bar edge detector over adjacent snapshots, not a persistent state.
    if let (Some(sma50), Some(sma200), Some(prev50), Some(prev200)) = (
        cur.ind.sma50,
        cur.ind.sma200,
        prev.ind.sma50,
        prev.ind.sma200,
    ) {
        if sma50 > sma200 && prev50 <= prev200 {
            card.hit(3, "GOLDEN CROSS detected - strong bullish signal");
        } else if sma50 < sma200 && prev50 >= prev200 {
            card.hit(-3, "DEATH CROSS detected - strong bearish signal");
        }
    }

    if let (Some(ema12), Some(ema26)) = (cur.ind.ema12, cur.ind.ema26) {
        if ema12 > ema26 {
            card.hit(1, "EMA-12 above EMA-26 - bullish alignment");
        } else {
            card.hit(-1, "EMA-12 below EMA-26 - bearish alignment");
        }
    }

    let (score, signals) = card.fold();
    CategoryScore {
        score,
        signals,
        direction: Direction::from_score(score),
    }
}
