use crate::tree::DecisionTree;
use aqi_core::features::FEATURE_COUNT;
use aqi_core::predictor::Predictor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A trained AQI regression model.
///
/// Serialized as JSON tagged by `"kind"`:
///
/// ```text
/// {"kind": "linear", "intercept": 3.2, "coefficients": [0.6, 0.1, 0.25, -0.4]}
/// {"kind": "random_forest", "trees": [ ... ]}
/// {"kind": "gradient_boosting", "base_score": 150.0, "learning_rate": 0.1, "trees": [ ... ]}
/// ```
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    /// `intercept + coefficients · x`
    Linear {
        intercept: f64,
        coefficients: [f64; FEATURE_COUNT],
    },
    /// Mean of the tree outputs.
    RandomForest { trees: Vec<DecisionTree> },
    /// `base_score + learning_rate * Σ tree outputs`
    GradientBoosting {
        base_score: f64,
        learning_rate: f64,
        trees: Vec<DecisionTree>,
    },
}

impl Regressor {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let model: Regressor = serde_json::from_str(json)?;
        model.validate()?;
        log::debug!("[AQI Debug] model: loaded {}", model.describe());
        Ok(model)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Short human-readable summary, e.g. `"random_forest (100 trees)"`.
    pub fn describe(&self) -> String {
        match self {
            Regressor::Linear { .. } => "linear".to_string(),
            Regressor::RandomForest { trees } => format!("random_forest ({} trees)", trees.len()),
            Regressor::GradientBoosting { trees, .. } => {
                format!("gradient_boosting ({} trees)", trees.len())
            }
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        match self {
            Regressor::Linear {
                intercept,
                coefficients,
            } => {
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    anyhow::bail!("linear model has non-finite parameters");
                }
            }
            Regressor::RandomForest { trees } | Regressor::GradientBoosting { trees, .. } => {
                if trees.is_empty() {
                    anyhow::bail!("ensemble has no trees");
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate()
                        .map_err(|e| anyhow::anyhow!("tree {}: {}", i, e))?;
                }
            }
        }
        Ok(())
    }
}

impl Predictor for Regressor {
    fn predict(&self, features: [f64; FEATURE_COUNT]) -> f64 {
        match self {
            Regressor::Linear {
                intercept,
                coefficients,
            } => {
                intercept
                    + coefficients
                        .iter()
                        .zip(features.iter())
                        .map(|(c, x)| c * x)
                        .sum::<f64>()
            }
            Regressor::RandomForest { trees } => {
                let total: f64 = trees.iter().map(|t| t.predict(&features)).sum();
                total / trees.len() as f64
            }
            Regressor::GradientBoosting {
                base_score,
                learning_rate,
                trees,
            } => {
                let total: f64 = trees.iter().map(|t| t.predict(&features)).sum();
                base_score + learning_rate * total
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LEAF;

    /// lag_1 <= 100 ? low : high
    fn stump(low: f64, high: f64) -> DecisionTree {
        DecisionTree {
            children_left: vec![1, LEAF, LEAF],
            children_right: vec![2, LEAF, LEAF],
            feature: vec![0, -2, -2],
            threshold: vec![100.0, -2.0, -2.0],
            value: vec![0.0, low, high],
        }
    }

    #[test]
    fn test_linear_predict() {
        let model = Regressor::from_json(
            r#"{"kind": "linear", "intercept": 5.0, "coefficients": [0.5, 0.25, 0.25, 1.0]}"#,
        )
        .unwrap();
        // 5 + 60 + 35 + 32.5 + 3
        assert_eq!(model.predict([120.0, 140.0, 130.0, 3.0]), 135.5);
    }

    #[test]
    fn test_random_forest_averages() {
        let model = Regressor::RandomForest {
            trees: vec![stump(40.0, 200.0), stump(60.0, 300.0)],
        };
        model.validate().unwrap();
        assert_eq!(model.predict([50.0, 0.0, 0.0, 0.0]), 50.0);
        assert_eq!(model.predict([150.0, 0.0, 0.0, 0.0]), 250.0);
    }

    #[test]
    fn test_gradient_boosting_sums() {
        let model = Regressor::GradientBoosting {
            base_score: 100.0,
            learning_rate: 0.5,
            trees: vec![stump(-20.0, 40.0), stump(-10.0, 20.0)],
        };
        model.validate().unwrap();
        assert_eq!(model.predict([50.0, 0.0, 0.0, 0.0]), 85.0);
        assert_eq!(model.predict([150.0, 0.0, 0.0, 0.0]), 130.0);
    }

    #[test]
    fn test_json_round_trip_of_ensemble() {
        let model = Regressor::RandomForest {
            trees: vec![stump(10.0, 20.0)],
        };
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains(r#""kind":"random_forest""#));
        assert_eq!(Regressor::from_json(&json).unwrap(), model);
    }

    #[test]
    fn test_rejects_invalid_models() {
        assert!(Regressor::from_json(r#"{"kind": "random_forest", "trees": []}"#).is_err());
        assert!(Regressor::from_json(
            r#"{"kind": "linear", "intercept": 0.0, "coefficients": [1.0, 2.0]}"#
        )
        .is_err());
        assert!(Regressor::from_json(r#"{"kind": "svm"}"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_tree() {
        let mut bad = stump(1.0, 2.0);
        bad.feature[0] = 7;
        let model = Regressor::RandomForest { trees: vec![bad] };
        let json = serde_json::to_string(&model).unwrap();
        let err = Regressor::from_json(&json).unwrap_err();
        assert!(err.to_string().starts_with("tree 0:"));
    }

    #[test]
    fn test_describe() {
        let model = Regressor::GradientBoosting {
            base_score: 0.0,
            learning_rate: 0.1,
            trees: vec![stump(1.0, 2.0), stump(1.0, 2.0)],
        };
        assert_eq!(model.describe(), "gradient_boosting (2 trees)");
    }
}
