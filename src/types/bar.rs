use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's open/high/low/close/volume for a security.
///
/// Bars are ordered ascending by date with no duplicate dates; validation of
/// that contract belongs to the quote layer, not the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Per-bar indicator values.
///
/// Every field is `None` until the indicator's warm-up window is filled.
/// A legitimate value of `0.0` (a flat MACD histogram, a zero DI) is
/// `Some(0.0)`, never `None` - rules must only be skipped for values that
/// were genuinely not computed yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSnapshot {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub bb_width: Option<f64>,
    pub atr14: Option<f64>,
    pub obv: Option<f64>,
    pub obv_sma20: Option<f64>,
    pub avg_volume20: Option<f64>,
    pub cmf20: Option<f64>,
    pub adx14: Option<f64>,
    pub plus_di: Option<f64>,
    pub minus_di: Option<f64>,
}

/// A bar together with its indicator snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedBar {
    pub bar: Bar,
    pub ind: IndicatorSnapshot,
}
