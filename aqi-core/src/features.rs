/// Number of inputs the regression model expects.
pub const FEATURE_COUNT: usize = 4;

/// Historical table column holding the prior day's AQI.
pub const COL_LAG_1: &str = "AQI_lag_1";
/// Historical table column holding the AQI seven days prior.
pub const COL_LAG_7: &str = "AQI_lag_7";
/// Historical table column holding the trailing 7-day mean AQI.
pub const COL_ROLL7_MEAN: &str = "AQI_roll7_mean";

/// Model input in fixed order: `[lag_1, lag_7, roll7_mean, city_code]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub lag_1: f64,
    pub lag_7: f64,
    pub roll7_mean: f64,
    pub city_code: i32,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.lag_1,
            self.lag_7,
            self.roll7_mean,
            f64::from(self.city_code),
        ]
    }
}
