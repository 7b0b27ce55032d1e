use serde::{Deserialize, Serialize};

/// Parameters for the dual-SMA crossover rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverSettings {
    /// Trailing window of the fast average, in periods.
    pub short_window: u32,
    /// Trailing window of the slow average, in periods.
    pub long_window: u32,
}

impl CrossoverSettings {
    pub fn new(short_window: u32, long_window: u32) -> Self {
        Self {
            short_window,
            long_window,
        }
    }
}
