use crate::error::{Error, Result};
use crate::types::ReturnSeries;
use core_types::{PriceSeries, SignalSeries};

/// Converts a position signal and the price history it was derived from
/// into per-period market and strategy returns.
///
/// The market return at `t` is `close[t] / close[t-1] - 1`; the strategy
/// return is that weighted by the position in force at `t`. Every signal
/// timestamp must match the price series contiguously, and the first one
/// must have a predecessor to difference against; anything else is an
/// `IndexMismatch`.
pub fn account_returns(prices: &PriceSeries, signal: &SignalSeries) -> Result<ReturnSeries> {
    if signal.is_empty() {
        return Ok(ReturnSeries {
            timestamps: Vec::new(),
            market: Vec::new(),
            strategy: Vec::new(),
        });
    }

    let points = prices.points();
    let first = signal.timestamps[0];
    let offset = points
        .iter()
        .position(|p| p.timestamp == first)
        .ok_or(Error::IndexMismatch { timestamp: first })?;
    if offset == 0 {
        // No prior close to difference against.
        return Err(Error::IndexMismatch { timestamp: first });
    }
    if offset + signal.len() > points.len() {
        return Err(Error::IndexMismatch {
            timestamp: signal.timestamps[signal.len() - 1],
        });
    }

    let closes = prices.closes();
    let mut market = Vec::with_capacity(signal.len());
    let mut strategy = Vec::with_capacity(signal.len());
    for (k, (&timestamp, &position)) in
        signal.timestamps.iter().zip(&signal.positions).enumerate()
    {
        let t = offset + k;
        if points[t].timestamp != timestamp {
            return Err(Error::IndexMismatch { timestamp });
        }
        let r = closes[t] / closes[t - 1] - 1.0;
        market.push(r);
        strategy.push(f64::from(position) * r);
    }

    Ok(ReturnSeries {
        timestamps: signal.timestamps.clone(),
        market,
        strategy,
    })
}

/// Running product of `(1 + r)` starting from 1.0.
///
/// The final element is the terminal multiplicative return over the series.
pub fn cumulative(returns: &[f64]) -> Vec<f64> {
    let mut acc = 1.0;
    returns
        .iter()
        .map(|r| {
            acc *= 1.0 + r;
            acc
        })
        .collect()
}

/// Terminal growth factor of a return series; 1.0 for an empty series.
pub fn terminal_return(returns: &[f64]) -> f64 {
    cumulative(returns).last().copied().unwrap_or(1.0)
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

    fn signal_over(prices: &PriceSeries, from: usize, positions: Vec<u8>) -> SignalSeries {
        let timestamps = prices.points()[from..from + positions.len()]
            .iter()
            .map(|p| p.timestamp)
            .collect();
        SignalSeries::new(timestamps, positions).unwrap()
    }

    #[test]
    fn strategy_returns_are_position_weighted_market_returns() {
        let prices = series(&[10, 11, 12, 11, 10, 9, 10, 11, 12, 13]);
        let signal = signal_over(&prices, 4, vec![1, 0, 0, 0, 1, 1]);

        let returns = account_returns(&prices, &signal).unwrap();

        assert_eq!(returns.len(), 6);
        // Market return at index 4: 10/11 - 1.
        assert!((returns.market[0] - (10.0 / 11.0 - 1.0)).abs() < 1e-12);
        // Long at index 4, flat afterwards until index 8.
        assert!((returns.strategy[0] - returns.market[0]).abs() < 1e-12);
        assert_eq!(returns.strategy[1], 0.0);
        assert_eq!(returns.strategy[2], 0.0);
        assert_eq!(returns.strategy[3], 0.0);
        assert!((returns.strategy[4] - (12.0 / 11.0 - 1.0)).abs() < 1e-12);
        assert!((returns.strategy[5] - (13.0 / 12.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn cumulative_compounds_from_one() {
        let curve = cumulative(&[0.1, -0.5, 1.0]);
        assert!((curve[0] - 1.1).abs() < 1e-12);
        assert!((curve[1] - 0.55).abs() < 1e-12);
        assert!((curve[2] - 1.1).abs() < 1e-12);
        assert!((terminal_return(&[0.1, -0.5, 1.0]) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn empty_series_has_unit_terminal_return() {
        assert_eq!(cumulative(&[]), Vec::<f64>::new());
        assert_eq!(terminal_return(&[]), 1.0);
    }

    #[test]
    fn unknown_signal_timestamp_is_a_mismatch() {
        let prices = series(&[10, 11, 12, 11, 10]);
        let stray = Utc.timestamp_opt(999_999, 0).unwrap();
        let signal = SignalSeries::new(vec![stray], vec![1]).unwrap();

        let err = account_returns(&prices, &signal).unwrap_err();
        assert_eq!(err, Error::IndexMismatch { timestamp: stray });
    }

    #[test]
    fn signal_starting_at_the_first_close_is_a_mismatch() {
        let prices = series(&[10, 11, 12]);
        let signal = signal_over(&prices, 0, vec![1, 0]);
        assert!(matches!(
            account_returns(&prices, &signal).unwrap_err(),
            Error::IndexMismatch { .. }
        ));
    }

    #[test]
    fn non_contiguous_signal_timestamps_are_a_mismatch() {
        let prices = series(&[10, 11, 12, 11, 10]);
        let timestamps = vec![
            prices.points()[1].timestamp,
            prices.points()[3].timestamp, // skips index 2
        ];
        let signal = SignalSeries::new(timestamps, vec![1, 1]).unwrap();
        assert!(matches!(
            account_returns(&prices, &signal).unwrap_err(),
            Error::IndexMismatch { .. }
        ));
    }

    #[test]
    fn empty_signal_yields_empty_returns() {
        let prices = series(&[10, 11, 12]);
        let signal = SignalSeries::new(Vec::new(), Vec::new()).unwrap();
        let returns = account_returns(&prices, &signal).unwrap();
        assert!(returns.is_empty());
    }
}
