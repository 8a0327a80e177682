//! Error taxonomy for a single forecast interaction.

use crate::predictor::EncodingError;
use thiserror::Error;

/// Why one "analyze and predict" action produced no forecast.
///
/// Every variant is terminal for that interaction only; the caller may
/// retry straight away with different input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Model, encoder or history failed to load at startup.
    #[error("Prediction is unavailable because the model assets failed to load: {0}")]
    AssetsUnavailable(String),

    /// Blank or whitespace-only input.
    #[error("Please enter a city name.")]
    EmptyInput,

    /// No history for the city. Carries the trimmed input as typed.
    #[error("City '{0}' not found in the dataset. Please check the spelling.")]
    CityNotFound(String),

    /// The city has history but the encoder does not know it.
    #[error("Cannot encode the city for the model: {0}")]
    Encoding(#[from] EncodingError),

    /// Anything else raised while assembling features or calling the model.
    #[error("An unexpected error occurred during prediction: {0}")]
    Unexpected(String),
}

impl ForecastError {
    /// Whether the outcome should be shown as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, ForecastError::EmptyInput)
    }
}
