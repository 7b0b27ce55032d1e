pub mod error;

use analytics::returns::{account_returns, cumulative, terminal_return};
use analytics::types::BacktestReport;
use core_types::{PriceSeries, TimeSeries};
use strategies::{CrossoverSettings, crossover_signal};
use tracing::info;

pub use error::{Error, Result};

/// The engine for evaluating one crossover parameter pair against a
/// historical price series.
///
/// Each run derives the lagged signal, accounts market and strategy
/// returns, and compounds both curves into a fresh report. The borrowed
/// price series is never mutated and no state is shared between runs,
/// which is what lets the optimizer evaluate many pairs in parallel.
pub struct Backtester<'a> {
    prices: &'a PriceSeries,
}

impl<'a> Backtester<'a> {
    pub fn new(prices: &'a PriceSeries) -> Self {
        Self { prices }
    }

    pub fn run(&self, settings: &CrossoverSettings) -> Result<BacktestReport> {
        let signal = crossover_signal(self.prices, settings)?;
        let returns = account_returns(self.prices, &signal)?;

        let cumulative_market =
            TimeSeries::new(returns.timestamps.clone(), cumulative(&returns.market))?;
        let cumulative_strategy =
            TimeSeries::new(returns.timestamps.clone(), cumulative(&returns.strategy))?;

        let report = BacktestReport {
            short_window: settings.short_window,
            long_window: settings.long_window,
            terminal_market: terminal_return(&returns.market),
            terminal_strategy: terminal_return(&returns.strategy),
            cumulative_market,
            cumulative_strategy,
        };

        info!(
            short = settings.short_window,
            long = settings.long_window,
            periods = report.cumulative_strategy.len(),
            terminal_strategy = report.terminal_strategy,
            "Backtest finished."
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_types::PricePoint;
    use rust_decimal::Decimal;

    fn series(closes: &[i64]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                timestamp: Utc.timestamp_opt(i as i64 * 86_400, 0).unwrap(),
                close: Decimal::from(close),
            })
            .collect();
        PriceSeries::new(points).unwrap()
    }

    #[test]
    fn evaluates_one_pair_end_to_end() {
        let prices = series(&[10, 11, 12, 11, 10, 9, 10, 11, 12, 13]);
        let report = Backtester::new(&prices)
            .run(&CrossoverSettings::new(2, 4))
            .unwrap();

        assert_eq!(report.short_window, 2);
        assert_eq!(report.long_window, 4);
        assert_eq!(report.cumulative_strategy.len(), 6);
        assert_eq!(
            report.cumulative_strategy.timestamps,
            report.cumulative_market.timestamps
        );

        // Long at index 4, then again at 8 and 9: the strategy compounds
        // (10/11) * (12/11) * (13/12), the market compounds 13/11 over the
        // same stretch.
        let expected_strategy = (10.0 / 11.0) * (12.0 / 11.0) * (13.0 / 12.0);
        assert!((report.terminal_strategy - expected_strategy).abs() < 1e-9);
        assert!((report.terminal_market - 13.0 / 11.0).abs() < 1e-9);
        assert!(
            (report.cumulative_strategy.last_value().unwrap() - report.terminal_strategy).abs()
                < 1e-12
        );
    }

    #[test]
    fn propagates_invalid_pairs() {
        let prices = series(&[10, 11, 12, 11, 10, 9, 10, 11, 12, 13]);
        let err = Backtester::new(&prices)
            .run(&CrossoverSettings::new(4, 4))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Strategy(strategies::Error::InvalidWindowPair { .. })
        ));
    }
}
