pub mod error;
pub mod ma_crossover;
pub mod types;

// Re-export the most important items for easy access.
pub use error::{Error, Result};
pub use ma_crossover::crossover_signal;
pub use types::CrossoverSettings;
