pub mod error;
pub mod scaler;
pub mod windower;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use scaler::MinMaxScaler;
pub use windower::{WindowSet, make_windows};
