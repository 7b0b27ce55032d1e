pub mod error;
pub mod types;

use backtester::Backtester;
use core_types::PriceSeries;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use strategies::CrossoverSettings;
use tracing::{debug, info};

pub use error::{Error, Result};
pub use types::GridResult;

/// Enumerates the valid (short, long) pairs from the candidate sets.
///
/// Pairs with `short >= long` are an expected property of the Cartesian
/// product, not malformed input, and are pruned here. For overlapping
/// candidate sets that is roughly half the grid.
fn valid_pairs(short_candidates: &[u32], long_candidates: &[u32]) -> Vec<(u32, u32)> {
    let mut pairs = Vec::with_capacity(short_candidates.len() * long_candidates.len());
    for &short in short_candidates {
        for &long in long_candidates {
            if short < long {
                pairs.push((short, long));
            }
        }
    }
    pairs
}

/// Sweeps the candidate grid, evaluating every valid pair in parallel and
/// ranking the outcomes by terminal cumulative strategy return.
///
/// Nothing is shared or mutated across evaluations, so the sweep runs on
/// the rayon pool with no ordering requirement; ordering is imposed only on
/// the collected table: descending terminal return, ties broken by
/// ascending (short, long). Identical inputs always produce an identical
/// table. An empty table means no valid pair existed; the caller must treat
/// "no best parameters" as a reportable condition, not a crash.
///
/// A set `stop` flag is honored before each remaining evaluation, so a
/// cancelled sweep yields just the pairs already attempted.
pub fn optimize(
    prices: &PriceSeries,
    short_candidates: &[u32],
    long_candidates: &[u32],
    stop: Option<&AtomicBool>,
) -> Result<Vec<GridResult>> {
    let pairs = valid_pairs(short_candidates, long_candidates);
    let pruned = short_candidates.len() * long_candidates.len() - pairs.len();
    if pairs.is_empty() {
        info!(pruned, "No valid window pair in the candidate grid.");
        return Ok(Vec::new());
    }
    debug!(pairs = pairs.len(), pruned, "Starting grid sweep.");

    let evaluated: Vec<Option<GridResult>> = pairs
        .par_iter()
        .map(|&(short_window, long_window)| -> Result<Option<GridResult>> {
            if let Some(flag) = stop {
                if flag.load(Ordering::Relaxed) {
                    return Ok(None);
                }
            }
            let report =
                Backtester::new(prices).run(&CrossoverSettings::new(short_window, long_window))?;
            Ok(Some(GridResult {
                short_window,
                long_window,
                terminal_return: report.terminal_strategy,
            }))
        })
        .collect::<Result<_>>()?;

    let mut results: Vec<GridResult> = evaluated.into_iter().flatten().collect();
    results.sort_by(|a, b| {
        b.terminal_return
            .partial_cmp(&a.terminal_return)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| (a.short_window, a.long_window).cmp(&(b.short_window, b.long_window)))
    });

    info!(evaluated = results.len(), "Grid sweep finished.");
    Ok(results)
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

    const SAW: [i64; 10] = [10, 11, 12, 11, 10, 9, 10, 11, 12, 13];

    #[test]
    fn prunes_equal_and_inverted_pairs() {
        // Three sawtooth cycles, long enough for the (5, 10) pair.
        let closes: Vec<i64> = SAW.iter().cycle().take(30).copied().collect();
        let results = optimize(&series(&closes), &[5, 10], &[5, 10], None).unwrap();

        // (5, 5), (10, 10) and (10, 5) are pruned, never evaluated.
        assert_eq!(results.len(), 1);
        assert_eq!(
            (results[0].short_window, results[0].long_window),
            (5, 10)
        );
    }

    #[test]
    fn all_invalid_pairs_yield_an_empty_table() {
        let results = optimize(&series(&SAW), &[20], &[5], None).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn ranks_descending_by_terminal_return() {
        let results = optimize(&series(&SAW), &[2, 3], &[4], None).unwrap();
        assert_eq!(results.len(), 2);

        // The faster pair catches the final rally earlier and wins.
        assert_eq!(
            (results[0].short_window, results[0].long_window),
            (2, 4)
        );
        let expected_best = (10.0 / 11.0) * (12.0 / 11.0) * (13.0 / 12.0);
        assert!((results[0].terminal_return - expected_best).abs() < 1e-9);
        assert!(results[0].terminal_return > results[1].terminal_return);
    }

    #[test]
    fn ties_break_by_ascending_windows() {
        // A constant series keeps every pair flat, so every terminal return
        // ties at exactly 1.0 and only the tie-break orders the table.
        let flat = series(&[7; 12]);
        let results = optimize(&flat, &[3, 2], &[5, 4], None).unwrap();

        let order: Vec<(u32, u32)> = results
            .iter()
            .map(|r| (r.short_window, r.long_window))
            .collect();
        assert_eq!(order, vec![(2, 4), (2, 5), (3, 4), (3, 5)]);
        assert!(results.iter().all(|r| r.terminal_return == 1.0));
    }

    #[test]
    fn identical_inputs_produce_identical_tables() {
        let prices = series(&SAW);
        let first = optimize(&prices, &[2, 3], &[4, 5, 6], None).unwrap();
        let second = optimize(&prices, &[2, 3], &[4, 5, 6], None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn a_set_stop_flag_skips_remaining_evaluations() {
        let stop = AtomicBool::new(true);
        let results = optimize(&series(&SAW), &[2, 3], &[4, 5], Some(&stop)).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn oversized_long_candidates_propagate_as_errors() {
        let err = optimize(&series(&SAW), &[2], &[40], None).unwrap_err();
        assert!(matches!(
            err,
            Error::Backtest(backtester::Error::Strategy(
                strategies::Error::InsufficientData { .. }
            ))
        ));
    }
}
