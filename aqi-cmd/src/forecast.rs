//! Lookup-and-predict: resolve a typed city name to its latest history row,
//! build the feature vector and run the model.

use crate::assets::AssetBundle;
use aqi_core::error::ForecastError;
use aqi_core::features::{FeatureVector, COL_LAG_1, COL_LAG_7, COL_ROLL7_MEAN, FEATURE_COUNT};
use aqi_core::predictor::{CityEncoder, Predictor};
use aqi_db::models::HistoryRecord;
use aqi_db::Database;
use aqi_utils::city;
use log::info;
use serde::Serialize;

/// Result of one successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Display name from the matched record.
    pub city: String,
    /// Date of the record the features came from.
    pub date: String,
    pub features: [f64; FEATURE_COUNT],
    /// Model output rounded half-to-even.
    pub predicted_aqi: i64,
    /// Prior day's AQI truncated toward zero, shown as context.
    pub recent_aqi: i64,
}

/// Reject blank input, returning the trimmed text otherwise.
pub fn check_input(city_input: &str) -> Result<&str, ForecastError> {
    let trimmed = city_input.trim();
    if trimmed.is_empty() {
        return Err(ForecastError::EmptyInput);
    }
    Ok(trimmed)
}

/// Forecast the AQI for `city_input` using a loaded bundle.
pub fn lookup_and_predict(
    bundle: &AssetBundle,
    city_input: &str,
) -> Result<Forecast, ForecastError> {
    predict_city(bundle.history(), bundle.encoder(), bundle.model(), city_input)
}

/// Forecast the AQI for `city_input`.
///
/// Matching is case- and whitespace-insensitive. The latest record (max
/// date, last in file order on ties) supplies the lag features; its raw
/// city name goes through the encoder unchanged.
pub fn predict_city(
    history: &Database,
    encoder: &dyn CityEncoder,
    model: &dyn Predictor,
    city_input: &str,
) -> Result<Forecast, ForecastError> {
    let trimmed = check_input(city_input)?;
    let city_lookup = city::lookup_key(trimmed);

    let latest = history
        .query_latest_record(&city_lookup)
        .map_err(|e| ForecastError::Unexpected(e.to_string()))?
        .ok_or_else(|| ForecastError::CityNotFound(trimmed.to_string()))?;

    info!("Crunching data for {}...", trimmed);

    let features = FeatureVector {
        lag_1: required(latest.aqi_lag_1, COL_LAG_1, &latest)?,
        lag_7: required(latest.aqi_lag_7, COL_LAG_7, &latest)?,
        roll7_mean: required(latest.aqi_roll7_mean, COL_ROLL7_MEAN, &latest)?,
        city_code: encoder.encode(&latest.city)?,
    };
    let inputs = features.to_array();
    let raw = model.predict(inputs);
    let predicted_aqi = round_prediction(raw)?;

    info!(
        "Predicted AQI {} ({:.3}) for {} from {:?}",
        predicted_aqi, raw, latest.city_clean, inputs
    );

    Ok(Forecast {
        city: latest.city_clean,
        date: latest.date,
        features: inputs,
        predicted_aqi,
        recent_aqi: features.lag_1.trunc() as i64,
    })
}

fn required(value: Option<f64>, column: &str, record: &HistoryRecord) -> Result<f64, ForecastError> {
    value.ok_or_else(|| {
        ForecastError::Unexpected(format!(
            "missing {} for {} on {}",
            column, record.city_clean, record.date
        ))
    })
}

/// Round a model output to the nearest integer, ties to even.
pub fn round_prediction(raw: f64) -> Result<i64, ForecastError> {
    if !raw.is_finite() {
        return Err(ForecastError::Unexpected(format!(
            "model returned a non-finite prediction ({})",
            raw
        )));
    }
    let rounded = raw.round_ties_even();
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(ForecastError::Unexpected(format!(
            "model prediction {} is out of range",
            raw
        )));
    }
    Ok(rounded as i64)
}
