//! Sibyl - technical analysis and signal scoring server for daily stock data.
//!
//! Daily bars flow one way: quotes -> indicator table -> category scorers ->
//! overall call -> chart-ready JSON envelope. Every request recomputes from
//! the full history; nothing is carried between invocations.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use config::Config;
use services::QuoteService;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub quotes: Arc<QuoteService>,
}
