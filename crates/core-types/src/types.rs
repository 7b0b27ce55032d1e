use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use num_traits::cast::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single close-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: Decimal,
}

/// An ordered close-price history for one instrument.
///
/// Timestamps are strictly increasing; gaps (non-trading days) are allowed.
/// The series is loaded once per run and read-only thereafter, so every
/// accessor borrows. Construction goes through `new`, which enforces the
/// ordering invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from observations, rejecting unordered or duplicate
    /// timestamps.
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].timestamp == pair[0].timestamp {
                return Err(Error::DuplicateTimestamp {
                    index: index + 1,
                    timestamp: pair[1].timestamp,
                });
            }
            if pair[1].timestamp < pair[0].timestamp {
                return Err(Error::UnorderedTimestamps {
                    index: index + 1,
                    previous: pair[0].timestamp,
                    current: pair[1].timestamp,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Close prices converted to `f64` for rolling-window and return
    /// arithmetic. Conversion happens once, at this boundary.
    pub fn closes(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.close.to_f64().unwrap_or(f64::NAN))
            .collect()
    }
}

/// A timestamp-aligned series of `f64` values, one value per timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(Error::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// A per-timestamp position state: 1 = long, 0 = flat.
///
/// The position at a timestamp is always the crossover state observed one
/// period earlier; producers are responsible for that shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSeries {
    pub timestamps: Vec<DateTime<Utc>>,
    pub positions: Vec<u8>,
}

impl SignalSeries {
    pub fn new(timestamps: Vec<DateTime<Utc>>, positions: Vec<u8>) -> Result<Self> {
        if timestamps.len() != positions.len() {
            return Err(Error::LengthMismatch {
                timestamps: timestamps.len(),
                values: positions.len(),
            });
        }
        Ok(Self {
            timestamps,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
