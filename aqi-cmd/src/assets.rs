//! One-time loading of the model, encoder and historical table.
//!
//! The three files live at fixed names next to the executable (or in a
//! directory given on the command line). They are loaded once into an
//! immutable [`AssetBundle`] that every prediction borrows.

use aqi_core::error::ForecastError;
use aqi_core::predictor::{CityEncoder, Predictor};
use aqi_db::Database;
use aqi_model::encoder::LabelEncoder;
use aqi_model::regressor::Regressor;
use anyhow::Context;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

pub const MODEL_FILE: &str = "aqi_model.json";
pub const ENCODER_FILE: &str = "city_encoder.json";
pub const HISTORY_FILE: &str = "aqi.csv";
/// Read instead of [`HISTORY_FILE`] when only the compressed table is shipped.
pub const HISTORY_GZ_FILE: &str = "aqi.csv.gz";

/// Locations of the three asset files.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub model: PathBuf,
    pub encoder: PathBuf,
    pub history: PathBuf,
}

impl AssetPaths {
    /// The fixed file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let csv = dir.join(HISTORY_FILE);
        let gz = dir.join(HISTORY_GZ_FILE);
        let history = if !csv.exists() && gz.exists() { gz } else { csv };
        AssetPaths {
            model: dir.join(MODEL_FILE),
            encoder: dir.join(ENCODER_FILE),
            history,
        }
    }

    /// The fixed file names next to the running executable.
    pub fn beside_executable() -> anyhow::Result<Self> {
        let exe = std::env::current_exe().context("cannot locate the running executable")?;
        let dir = exe
            .parent()
            .ok_or_else(|| anyhow::anyhow!("executable path has no parent directory"))?;
        Ok(Self::in_dir(dir))
    }

    /// `dir` when given, otherwise the executable's directory.
    pub fn resolve(dir: Option<&Path>) -> anyhow::Result<Self> {
        match dir {
            Some(dir) => Ok(Self::in_dir(dir)),
            None => Self::beside_executable(),
        }
    }
}

/// Everything a prediction needs, loaded once and never mutated.
pub struct AssetBundle {
    model: Box<dyn Predictor>,
    encoder: Box<dyn CityEncoder>,
    history: Database,
    cities: Vec<String>,
}

impl AssetBundle {
    /// Assemble a bundle from already-loaded parts.
    pub fn new(
        model: Box<dyn Predictor>,
        encoder: Box<dyn CityEncoder>,
        history: Database,
    ) -> anyhow::Result<Self> {
        let cities = history.query_cities()?;
        if cities.is_empty() {
            warn!("Historical table has no rows; every lookup will fail");
        }
        Ok(AssetBundle {
            model,
            encoder,
            history,
            cities,
        })
    }

    /// Read and validate all three files.
    pub fn load(paths: &AssetPaths) -> anyhow::Result<Self> {
        let model = Regressor::from_path(&paths.model)
            .with_context(|| format!("failed to load model {}", paths.model.display()))?;
        info!("Loaded model {}", model.describe());

        let encoder = LabelEncoder::from_path(&paths.encoder)
            .with_context(|| format!("failed to load encoder {}", paths.encoder.display()))?;
        info!("Loaded encoder with {} cities", encoder.classes().len());

        let history = Database::new()?;
        load_history_file(&history, &paths.history).with_context(|| {
            format!("failed to load history {}", paths.history.display())
        })?;

        Self::new(Box::new(model), Box::new(encoder), history)
    }

    pub fn model(&self) -> &dyn Predictor {
        self.model.as_ref()
    }

    pub fn encoder(&self) -> &dyn CityEncoder {
        self.encoder.as_ref()
    }

    pub fn history(&self) -> &Database {
        &self.history
    }

    /// Sorted display names of every city in the historical table.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}

fn load_history_file(db: &Database, path: &Path) -> anyhow::Result<usize> {
    let is_gz = path.extension().is_some_and(|ext| ext == "gz");
    if is_gz {
        let bytes = std::fs::read(path)?;
        db.load_history_gz(&bytes)
    } else {
        let csv_data = std::fs::read_to_string(path)?;
        db.load_history(&csv_data)
    }
}

/// Asset state after startup.
///
/// Loading never fails past this boundary: a failure is kept as
/// `Unavailable` so callers can keep running and refuse predictions.
pub enum Assets {
    Ready(AssetBundle),
    Unavailable(String),
}

impl Assets {
    pub fn load(paths: &AssetPaths) -> Self {
        Self::from_result(AssetBundle::load(paths))
    }

    /// Resolve the asset directory and load, folding both failures into
    /// `Unavailable`.
    pub fn resolve_and_load(dir: Option<&Path>) -> Self {
        Self::from_result(AssetPaths::resolve(dir).and_then(|paths| AssetBundle::load(&paths)))
    }

    pub fn from_result(result: anyhow::Result<AssetBundle>) -> Self {
        match result {
            Ok(bundle) => Assets::Ready(bundle),
            Err(e) => {
                let reason = format!("{:#}", e);
                error!("Error loading files: {}", reason);
                Assets::Unavailable(reason)
            }
        }
    }

    pub fn bundle(&self) -> Result<&AssetBundle, ForecastError> {
        match self {
            Assets::Ready(bundle) => Ok(bundle),
            Assets::Unavailable(reason) => Err(ForecastError::AssetsUnavailable(reason.clone())),
        }
    }

    /// Empty when the assets failed to load.
    pub fn cities(&self) -> &[String] {
        match self {
            Assets::Ready(bundle) => bundle.cities(),
            Assets::Unavailable(_) => &[],
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match self {
            Assets::Ready(_) => None,
            Assets::Unavailable(reason) => Some(reason),
        }
    }
}
