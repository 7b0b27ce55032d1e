use crate::error::{Error, Result};
use crate::SequencePredictor;
use preprocessing::WindowSet;

/// A persistence baseline: the next scaled value is predicted to equal the
/// final value of the window.
///
/// It exists to exercise the predictor seam end to end without a trained
/// model; `fit` is a no-op by contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastValuePredictor;

impl SequencePredictor for LastValuePredictor {
    fn name(&self) -> &'static str {
        "last_value"
    }

    fn fit(&mut self, _windows: &WindowSet) -> Result<()> {
        Ok(())
    }

    fn predict(&self, window: &[f64]) -> Result<f64> {
        window.last().copied().ok_or(Error::EmptyWindow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_the_final_window_value() {
        let predictor = LastValuePredictor;
        assert_eq!(predictor.predict(&[0.2, 0.4, 0.6]).unwrap(), 0.6);
    }

    #[test]
    fn rejects_an_empty_window() {
        let predictor = LastValuePredictor;
        assert!(matches!(
            predictor.predict(&[]).unwrap_err(),
            Error::EmptyWindow
        ));
    }
}
