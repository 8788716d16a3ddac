use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Base URL of the chart API used for daily quotes.
    pub quote_api_base: String,
    /// Exchange suffix appended to tickers that carry none (e.g. ".JK").
    pub quote_suffix: String,
    /// How many calendar days of daily bars to request.
    pub history_days: u32,
    /// Timeout for upstream quote requests, in seconds.
    pub quote_timeout_secs: u64,
    /// Freshness hint for the TA response (Cache-Control max-age), in seconds.
    pub ta_max_age_secs: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        Self {
            host,
            port,
            quote_api_base: env::var("QUOTE_API_BASE")
                .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string()),
            quote_suffix: env::var("QUOTE_SUFFIX").unwrap_or_else(|_| ".JK".to_string()),
            history_days: env::var("HISTORY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(365),
            quote_timeout_secs: env::var("QUOTE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            ta_max_age_secs: env::var("TA_MAX_AGE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
