use chrono::{DateTime, Utc};
use core_types::TimeSeries;
use serde::Serialize;

/// Per-timestamp simple returns for the market and for the position-weighted
/// strategy, date-aligned on the signal's index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnSeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub market: Vec<f64>,
    pub strategy: Vec<f64>,
}

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.market.len()
    }

    pub fn is_empty(&self) -> bool {
        self.market.is_empty()
    }
}

/// The outcome of evaluating one crossover parameter pair: both compounded
/// curves plus their terminal growth factors (1.23 means +23%).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestReport {
    pub short_window: u32,
    pub long_window: u32,
    pub cumulative_market: TimeSeries,
    pub cumulative_strategy: TimeSeries,
    pub terminal_market: f64,
    pub terminal_strategy: f64,
}
