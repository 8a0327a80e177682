//! Query result model structs.

use serde::Serialize;

/// One row of the historical feature table.
///
/// Lag and rolling-mean features are `None` when the source cell was empty
/// or not a finite number.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryRecord {
    /// City name exactly as it appears in the CSV; this is what the encoder expects.
    pub city: String,
    /// Trimmed, title-cased city name for labels.
    pub city_clean: String,
    /// Trimmed, lower-cased city name for matching.
    pub city_lookup: String,
    /// Observation date (YYYY-MM-DD).
    pub date: String,
    /// AQI of the prior day.
    pub aqi_lag_1: Option<f64>,
    /// AQI seven days prior.
    pub aqi_lag_7: Option<f64>,
    /// Trailing 7-day mean AQI.
    pub aqi_roll7_mean: Option<f64>,
}
