use crate::error::Result;
use crate::SequencePredictor;
use core_types::PriceSeries;
use preprocessing::{MinMaxScaler, make_windows};
use serde::Serialize;
use tracing::info;

/// A one-step-ahead close-price forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Forecast {
    pub latest_close: f64,
    pub predicted_close: f64,
}

/// Scales the close series, trains the predictor on every window, then
/// feeds it the window ending at the latest close and inverse-transforms
/// the predicted scalar back into price space.
///
/// The scaler is fitted once and reused on both sides of the predictor, so
/// the returned price is in the same units as the input series. The core
/// owns scaling and inverse-scaling; the predictor only ever sees scaled
/// values.
pub fn forecast_next(
    prices: &PriceSeries,
    sequence_length: usize,
    model: &mut dyn SequencePredictor,
) -> Result<Forecast> {
    let closes = prices.closes();
    let scaler = MinMaxScaler::fit(&closes)?;
    let scaled = scaler.transform(&closes);

    let windows = make_windows(&scaled, sequence_length)?;
    model.fit(&windows)?;

    // The forecast window ends at the latest close, one step past the last
    // training window.
    let tail = &scaled[scaled.len() - sequence_length..];
    let predicted_scaled = model.predict(tail)?;
    let predicted_close = scaler.inverse(&[predicted_scaled])[0];
    let latest_close = closes[closes.len() - 1];

    info!(
        model = model.name(),
        latest_close, predicted_close, "Forecast computed."
    );

    Ok(Forecast {
        latest_close,
        predicted_close,
    })
}
