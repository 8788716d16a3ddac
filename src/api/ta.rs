//! Technical analysis endpoint.
//!
//! `GET /api/ta?ticker=BBRI` - fetches daily bars, annotates them with the
//! indicator table, runs the scoring engine, and reshapes everything into
//! the chart-ready envelope.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::services::analysis::rounding::{round2, round4};
use crate::services::{analysis, indicators};
use crate::types::{
    AnalysisPayload, AnnotatedBar, BollingerPoint, ChartIndicators, EmaPoint, LatestSummary,
    MacdPoint, OhlcvPoint, RsiPoint, SmaPoint, TaResponse,
};
use crate::AppState;

/// Query parameters for the TA endpoint.
#[derive(Debug, Deserialize)]
pub struct TaQuery {
    pub ticker: Option<String>,
}

/// Create the TA router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_ta))
}

/// Full technical analysis for one ticker.
async fn get_ta(
    State(state): State<AppState>,
    Query(query): Query<TaQuery>,
) -> Result<(HeaderMap, Json<TaResponse>)> {
    let raw = query
        .ticker
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Ticker parameter required".to_string()))?;
    let ticker = state.quotes.normalize_ticker(&raw);

    let bars = state.quotes.daily_bars(&ticker).await?;
    if bars.is_empty() {
        return Err(AppError::NotFound(format!("No data found for {}", ticker)));
    }
    debug!("Fetched {} bars for {}", bars.len(), ticker);

    let table = indicators::build_table(&bars);

    let analysis = match analysis::analyze(&ticker, &table) {
        Ok(result) => {
            info!(
                "Analysis for {}: {:?} (score {})",
                ticker, result.summary.overall, result.summary.score
            );
            AnalysisPayload::Complete(Box::new(result))
        }
        Err(analysis::EngineError::InsufficientHistory { available }) => {
            info!("Only {} bars for {} - analysis skipped", available, ticker);
            AnalysisPayload::Unavailable {
                error: "Not enough data for analysis".to_string(),
            }
        }
    };

    let latest = latest_summary(&table)
        .ok_or_else(|| AppError::Internal("empty bar table".to_string()))?;

    let data: Vec<OhlcvPoint> = table.iter().map(ohlcv_point).collect();
    let response = TaResponse {
        success: true,
        ticker: ticker.clone(),
        count: data.len(),
        data,
        indicators: chart_indicators(&table),
        latest,
        analysis,
    };

    // Freshness hint for the HTTP layer; daily bars change once a session.
    let mut headers = HeaderMap::new();
    let cache_control = format!("public, max-age={}", state.config.ta_max_age_secs);
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_str(&cache_control)
            .map_err(|e| AppError::Internal(e.to_string()))?,
    );

    Ok((headers, Json(response)))
}

fn date_string(annotated: &AnnotatedBar) -> String {
    annotated.bar.date.format("%Y-%m-%d").to_string()
}

fn ohlcv_point(annotated: &AnnotatedBar) -> OhlcvPoint {
    OhlcvPoint {
        time: date_string(annotated),
        open: round2(annotated.bar.open),
        high: round2(annotated.bar.high),
        low: round2(annotated.bar.low),
        close: round2(annotated.bar.close),
        volume: annotated.bar.volume,
    }
}

fn chart_indicators(table: &[AnnotatedBar]) -> ChartIndicators {
    ChartIndicators {
        sma: table
            .iter()
            .map(|a| SmaPoint {
                time: date_string(a),
                sma_20: a.ind.sma20.map(round2),
                sma_50: a.ind.sma50.map(round2),
                sma_200: a.ind.sma200.map(round2),
            })
            .collect(),
        ema: table
            .iter()
            .map(|a| EmaPoint {
                time: date_string(a),
                ema_12: a.ind.ema12.map(round2),
                ema_26: a.ind.ema26.map(round2),
            })
            .collect(),
        bb: table
            .iter()
            .map(|a| BollingerPoint {
                time: date_string(a),
                upper: a.ind.bb_upper.map(round2),
                middle: a.ind.bb_middle.map(round2),
                lower: a.ind.bb_lower.map(round2),
            })
            .collect(),
        rsi: table
            .iter()
            .map(|a| RsiPoint {
                time: date_string(a),
                value: a.ind.rsi14.map(round2),
            })
            .collect(),
        macd: table
            .iter()
            .map(|a| MacdPoint {
                time: date_string(a),
                macd: a.ind.macd.map(round4),
                signal: a.ind.macd_signal.map(round4),
                histogram: a.ind.macd_hist.map(round4),
            })
            .collect(),
    }
}

fn latest_summary(table: &[AnnotatedBar]) -> Option<LatestSummary> {
    let last = table.last()?;
    let prev = if table.len() >= 2 {
        &table[table.len() - 2]
    } else {
        last
    };

    let change = last.bar.close - prev.bar.close;
    let change_pct = if prev.bar.close != 0.0 {
        (change / prev.bar.close) * 100.0
    } else {
        0.0
    };

    Some(LatestSummary {
        price: round2(last.bar.close),
        change: round2(change),
        change_pct: round2(change_pct),
        volume: last.bar.volume,
        sma_20: last.ind.sma20.map(round2),
        sma_50: last.ind.sma50.map(round2),
        sma_200: last.ind.sma200.map(round2),
        rsi: last.ind.rsi14.map(round2),
        macd: last.ind.macd.map(round4),
        macd_signal: last.ind.macd_signal.map(round4),
        bb_upper: last.ind.bb_upper.map(round2),
        bb_lower: last.ind.bb_lower.map(round2),
        atr: last.ind.atr14.map(round2),
        adx: last.ind.adx14.map(round2),
    })
}
