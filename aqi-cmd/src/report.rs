//! Turning a forecast attempt into what the user sees.

use crate::assets::Assets;
use crate::forecast::{self, Forecast};
use crate::gauge::GaugeSpec;
use aqi_core::category::AqiCategory;
use aqi_core::error::ForecastError;
use serde::Serialize;

/// Width of the text gauge bar in cells.
const GAUGE_WIDTH: usize = 40;

/// Outcome of a single "analyze and predict" action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Warning { message: String },
    Error { message: String },
    Forecast(ForecastReport),
}

/// Everything the results view shows for a successful forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub city: String,
    /// Date of the latest record used for the forecast.
    pub date: String,
    pub predicted_aqi: i64,
    pub category: String,
    pub color: String,
    pub advisory: String,
    /// Most recent AQI in the data (the prior day's reading).
    pub recent_aqi: i64,
    pub gauge: GaugeSpec,
}

impl From<Forecast> for ForecastReport {
    fn from(forecast: Forecast) -> Self {
        let category = AqiCategory::from_aqi(forecast.predicted_aqi);
        let gauge = GaugeSpec::new(
            forecast.predicted_aqi as f64,
            format!("Predicted AQI for {}", forecast.city),
            category.color(),
        );
        ForecastReport {
            city: forecast.city,
            date: forecast.date,
            predicted_aqi: forecast.predicted_aqi,
            category: category.label().to_string(),
            color: category.color().to_string(),
            advisory: category.advisory().to_string(),
            recent_aqi: forecast.recent_aqi,
            gauge,
        }
    }
}

impl From<ForecastError> for Outcome {
    fn from(err: ForecastError) -> Self {
        let message = err.to_string();
        if err.is_warning() {
            Outcome::Warning { message }
        } else {
            Outcome::Error { message }
        }
    }
}

/// Run one forecast against whatever assets are available.
///
/// Never fails: every error becomes an [`Outcome`] for this interaction
/// only. Blank input is reported as a warning even when the assets are
/// unavailable.
pub fn analyze(assets: &Assets, city_input: &str) -> Outcome {
    let result = forecast::check_input(city_input)
        .and_then(|_| assets.bundle())
        .and_then(|bundle| forecast::lookup_and_predict(bundle, city_input));
    match result {
        Ok(forecast) => Outcome::Forecast(forecast.into()),
        Err(err) => {
            if !err.is_warning() {
                log::warn!("Forecast for '{}' failed: {}", city_input.trim(), err);
            }
            err.into()
        }
    }
}

impl Outcome {
    /// Plain-text rendering for the terminal.
    pub fn render_text(&self) -> String {
        match self {
            Outcome::Warning { message } => format!("Warning: {}", message),
            Outcome::Error { message } => format!("Error: {}", message),
            Outcome::Forecast(report) => report.render_text(),
        }
    }

    pub fn render_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ForecastReport {
    pub fn render_text(&self) -> String {
        let rule = "-".repeat(GAUGE_WIDTH + 2);
        [
            rule.clone(),
            self.gauge.render(GAUGE_WIDTH),
            String::new(),
            format!("Forecast Status: {} ({})", self.category, self.color),
            format!("Health Advisory: {}", self.advisory),
            String::new(),
            "Recent Context".to_string(),
            format!(
                "The most recent AQI in the data (Yesterday's): {}",
                self.recent_aqi
            ),
            rule,
        ]
        .join("\n")
    }
}
