use aqi_core::predictor::{CityEncoder, EncodingError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Label encoder over city names.
///
/// `classes` holds every city seen during training in ascending order; a
/// city's code is its index. Matching is exact, so `"delhi"` and `"Delhi "`
/// are both unknown when the vocabulary holds `"Delhi"`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let encoder: LabelEncoder = serde_json::from_str(json)?;
        encoder.validate()?;
        log::debug!(
            "[AQI Debug] encoder: {} classes loaded",
            encoder.classes.len()
        );
        Ok(encoder)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.classes.is_empty() {
            anyhow::bail!("encoder has no classes");
        }
        if let Some(pair) = self.classes.windows(2).find(|w| w[0] >= w[1]) {
            anyhow::bail!(
                "encoder classes must be strictly ascending, found '{}' before '{}'",
                pair[0],
                pair[1]
            );
        }
        Ok(())
    }
}

impl CityEncoder for LabelEncoder {
    fn encode(&self, name: &str) -> Result<i32, EncodingError> {
        let index = self
            .classes
            .binary_search_by(|class| class.as_str().cmp(name))
            .map_err(|_| EncodingError::UnknownCity(name.to_string()))?;
        i32::try_from(index).map_err(|_| EncodingError::CodeOverflow(name.to_string()))
    }
}
