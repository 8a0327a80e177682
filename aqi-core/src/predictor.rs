//! Narrow interfaces over the trained model and the city encoder.
//!
//! The forecasting routine only depends on these traits, so any model or
//! encoding technology can be plugged in behind them.

use crate::features::FEATURE_COUNT;
use thiserror::Error;

/// A trained regression model.
pub trait Predictor {
    /// Predict a continuous AQI value from `[lag_1, lag_7, roll7_mean, city_code]`.
    fn predict(&self, features: [f64; FEATURE_COUNT]) -> f64;
}

/// Maps raw city names to the integer codes the model was trained on.
pub trait CityEncoder {
    fn encode(&self, name: &str) -> Result<i32, EncodingError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The name is not part of the encoder's training vocabulary.
    #[error("city '{0}' was not seen when the model was trained")]
    UnknownCity(String),

    /// The vocabulary is larger than the code type can represent.
    #[error("encoder code for '{0}' does not fit in a 32-bit integer")]
    CodeOverflow(String),
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, features: [f64; FEATURE_COUNT]) -> f64 {
        (**self).predict(features)
    }
}

impl<E: CityEncoder + ?Sized> CityEncoder for Box<E> {
    fn encode(&self, name: &str) -> Result<i32, EncodingError> {
        (**self).encode(name)
    }
}
