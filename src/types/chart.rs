use serde::Serialize;

use crate::types::AnalysisResult;

/// Chart-ready OHLCV point. `time` is a `YYYY-MM-DD` date string, the format
/// lightweight-charts consumes.
#[derive(Debug, Clone, Serialize)]
pub struct OhlcvPoint {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Moving-average overlay point. Values are null during warm-up so series
/// stay aligned with the price data.
#[derive(Debug, Clone, Serialize)]
pub struct SmaPoint {
    pub time: String,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmaPoint {
    pub time: String,
    pub ema_12: Option<f64>,
    pub ema_26: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BollingerPoint {
    pub time: String,
    pub upper: Option<f64>,
    pub middle: Option<f64>,
    pub lower: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RsiPoint {
    pub time: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MacdPoint {
    pub time: String,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// Indicator series bundled for the chart client.
#[derive(Debug, Clone, Serialize)]
pub struct ChartIndicators {
    pub sma: Vec<SmaPoint>,
    pub ema: Vec<EmaPoint>,
    pub bb: Vec<BollingerPoint>,
    pub rsi: Vec<RsiPoint>,
    pub macd: Vec<MacdPoint>,
}

/// Latest-bar snapshot for the header of the TA view.
#[derive(Debug, Clone, Serialize)]
pub struct LatestSummary {
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
    pub volume: f64,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub atr: Option<f64>,
    pub adx: Option<f64>,
}

/// Analysis section of the TA response. Insufficient history is an expected
/// condition and serializes as `{"error": ...}` while the chart payload is
/// still returned.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisPayload {
    Complete(Box<AnalysisResult>),
    Unavailable { error: String },
}

/// Response envelope for `GET /api/ta`.
#[derive(Debug, Clone, Serialize)]
pub struct TaResponse {
    pub success: bool,
    pub ticker: String,
    pub count: usize,
    pub data: Vec<OhlcvPoint>,
    pub indicators: ChartIndicators,
    pub latest: LatestSummary,
    pub analysis: AnalysisPayload,
}
