use serde::Serialize;

/// One row of the ranked grid-search table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridResult {
    pub short_window: u32,
    pub long_window: u32,
    /// Terminal cumulative strategy return for this pair (1.23 = +23%).
    pub terminal_return: f64,
}
