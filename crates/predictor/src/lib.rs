pub mod baseline;
pub mod error;
pub mod forecast;

use preprocessing::WindowSet;

// Re-export the most important items for easy access.
pub use baseline::LastValuePredictor;
pub use error::{Error, Result};
pub use forecast::{Forecast, forecast_next};

/// The capability interface for a single-step sequence predictor.
///
/// Implementations consume fixed-length windows of scaled values and return
/// one predicted next-step scaled value per window. Training internals stay
/// opaque to the rest of the system: any model honoring `fit`/`predict`
/// plugs in behind this trait, regardless of architecture.
pub trait SequencePredictor {
    /// The name of the predictor, for logs and reports.
    fn name(&self) -> &'static str;

    /// Trains on windowed inputs and their next-step labels.
    fn fit(&mut self, windows: &WindowSet) -> Result<()>;

    /// Predicts the scaled value following one input window.
    fn predict(&self, window: &[f64]) -> Result<f64>;
}
