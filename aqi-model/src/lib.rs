//! Concrete model and encoder formats behind the `aqi-core` traits.
//!
//! Both artifacts are stored as JSON documents produced by the training
//! side:
//!
//! - [`encoder::LabelEncoder`]: `{"classes": ["Ahmedabad", "Delhi", ...]}`
//! - [`regressor::Regressor`]: a `"kind"`-tagged linear model or tree ensemble
//!
//! ```rust
//! use aqi_core::predictor::{CityEncoder, Predictor};
//! use aqi_model::{encoder::LabelEncoder, regressor::Regressor};
//!
//! let encoder = LabelEncoder::from_json(r#"{"classes": ["Delhi", "Mumbai"]}"#).unwrap();
//! assert_eq!(encoder.encode("Mumbai").unwrap(), 1);
//!
//! let model = Regressor::from_json(
//!     r#"{"kind": "linear", "intercept": 1.0, "coefficients": [1.0, 0.0, 0.0, 0.0]}"#,
//! )
//! .unwrap();
//! assert_eq!(model.predict([99.0, 0.0, 0.0, 1.0]), 100.0);
//! ```

pub mod encoder;
pub mod regressor;
pub mod tree;
