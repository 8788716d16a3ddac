//! Daily quote fetching.
//!
//! Pulls one year of daily OHLCV bars for a ticker from a Yahoo-style
//! chart API. Rows with missing OHLC fields are dropped; the analysis
//! layers never see partial bars.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::types::Bar;

/// Chart API response: `{"chart": {"result": [...], "error": ...}}`.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartNode,
}

#[derive(Debug, Deserialize)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: IndicatorsNode,
}

#[derive(Debug, Deserialize)]
struct IndicatorsNode {
    quote: Vec<QuoteNode>,
}

#[derive(Debug, Deserialize)]
struct QuoteNode {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}

/// Service for fetching daily bars.
pub struct QuoteService {
    http: Client,
    base_url: String,
    suffix: String,
    history_days: u32,
}

impl QuoteService {
    /// Create the service from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.quote_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.quote_api_base.trim_end_matches('/').to_string(),
            suffix: config.quote_suffix.clone(),
            history_days: config.history_days,
        })
    }

    /// Uppercase the ticker and append the default exchange suffix when the
    /// symbol carries none.
    pub fn normalize_ticker(&self, raw: &str) -> String {
        let ticker = raw.trim().to_uppercase();
        if ticker.contains('.') {
            ticker
        } else {
            format!("{}{}", ticker, self.suffix)
        }
    }

    /// Fetch the configured window of daily bars, ascending by date.
    pub async fn daily_bars(&self, ticker: &str) -> Result<Vec<Bar>> {
        let period2 = Utc::now().timestamp();
        let period1 = period2 - i64::from(self.history_days) * 86_400;
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, ticker, period1, period2
        );

        debug!("Fetching {} days of daily bars for {}", self.history_days, ticker);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("chart request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "chart API error {}: {}",
                status, body
            )));
        }

        let payload: ChartResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("failed to parse chart response: {}", e)))?;

        let result = payload
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| AppError::NotFound(format!("No data found for {}", ticker)))?;

        Ok(Self::collect_bars(result))
    }

    fn collect_bars(result: ChartResult) -> Vec<Bar> {
        let timestamps = result.timestamp.unwrap_or_default();
        let quote = match result.indicators.quote.into_iter().next() {
            Some(q) => q,
            None => return Vec::new(),
        };

        let opens = quote.open.unwrap_or_default();
        let highs = quote.high.unwrap_or_default();
        let lows = quote.low.unwrap_or_default();
        let closes = quote.close.unwrap_or_default();
        let volumes = quote.volume.unwrap_or_default();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            let (open, high, low, close) = match (
                value_at(&opens, i),
                value_at(&highs, i),
                value_at(&lows, i),
                value_at(&closes, i),
            ) {
                (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
                _ => continue,
            };

            let date = match DateTime::from_timestamp(*ts, 0) {
                Some(dt) => dt.date_naive(),
                None => continue,
            };

            bars.push(Bar {
                date,
                open,
                high,
                low,
                close,
                volume: value_at(&volumes, i).unwrap_or(0.0),
            });
        }

        bars
    }
}

fn value_at(series: &[Option<f64>], i: usize) -> Option<f64> {
    series.get(i).copied().flatten()
}
