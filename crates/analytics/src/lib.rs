pub mod error;
pub mod returns;
pub mod types;

// Re-export the most important items for easy access.
pub use error::{Error, Result};
pub use returns::{account_returns, cumulative, terminal_return};
pub use types::{BacktestReport, ReturnSeries};
