use crate::error::{Error, Result};
use crate::types::CrossoverSettings;
use core_types::{PriceSeries, SignalSeries};
use ta::Next;
use ta::indicators::SimpleMovingAverage as Sma;

/// Computes the lagged long/flat position signal for a dual-SMA crossover.
///
/// The raw signal at time `t` is 1 when the short average strictly exceeds
/// the long average over closes up to and including `t`, else 0 (equal
/// averages count as flat). The position applied at `t` is the raw signal
/// from `t - 1`: a crossover seen on today's close can only be acted upon
/// in tomorrow's return. Leading timestamps where either average is still
/// undefined are dropped, so the output is date-aligned and its first
/// position lands on source index `long_window`.
pub fn crossover_signal(
    prices: &PriceSeries,
    settings: &CrossoverSettings,
) -> Result<SignalSeries> {
    let short = settings.short_window as usize;
    let long = settings.long_window as usize;

    if short < 1 || long < 1 || short >= long {
        return Err(Error::InvalidWindowPair {
            short: settings.short_window,
            long: settings.long_window,
        });
    }
    // One defined raw signal plus the one-period shift needs long + 1 closes.
    if prices.len() <= long {
        return Err(Error::InsufficientData {
            len: prices.len(),
            required: long + 1,
        });
    }

    let closes = prices.closes();
    let mut short_sma = Sma::new(short).unwrap();
    let mut long_sma = Sma::new(long).unwrap();

    // raw[k] holds the crossover state at source index `long - 1 + k`, the
    // first index where both trailing averages are fully defined.
    let mut raw = Vec::with_capacity(closes.len() - long + 1);
    for (t, &close) in closes.iter().enumerate() {
        let short_avg = short_sma.next(close);
        let long_avg = long_sma.next(close);
        if t + 1 >= long {
            raw.push(if short_avg > long_avg { 1u8 } else { 0u8 });
        }
    }

    // Shift forward one period: the last raw value has nothing left to act
    // on, and the timestamps start one index later than the raw signal.
    raw.pop();
    let timestamps = prices.points()[long..]
        .iter()
        .map(|p| p.timestamp)
        .collect();

    Ok(SignalSeries::new(timestamps, raw)?)
}
