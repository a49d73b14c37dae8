use serde::{Deserialize, Serialize};

use crate::artifacts::ArtifactError;
use crate::core::features::FeatureVector;

/// One exported decision tree in the sklearn array layout: parallel arrays
/// indexed by node id, with `children_left[i] < 0` marking a leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i32>,
    pub children_right: Vec<i32>,
    /// Feature index tested at each internal node; unused at leaves.
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    /// Per-node class weights `[negative, positive]`.
    pub value: Vec<[f64; 2]>,
}

impl DecisionTree {
    /// Walk the tree for one sample and return `[p_negative, p_positive]`
    /// from the reached leaf's class weights.
    fn predict(&self, features: &FeatureVector) -> [f64; 2] {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left < 0 {
                break;
            }
            let feature_idx = self.feature[node] as usize;
            node = if features[feature_idx] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }

        let [neg, pos] = self.value[node];
        let total = neg + pos;
        if total > 0.0 {
            [neg / total, pos / total]
        } else {
            [0.5, 0.5]
        }
    }

    fn validate(&self, index: usize) -> Result<(), ArtifactError> {
        let n = self.children_left.len();
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(ArtifactError::Malformed(format!(
                "tree {} has inconsistent node array lengths",
                index
            )));
        }
        if n == 0 {
            return Err(ArtifactError::Malformed(format!("tree {} is empty", index)));
        }
        Ok(())
    }
}

/// Trained model parameters, as exported offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelParams {
    /// Logistic regression over the scaled vector.
    Logistic {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    /// Random-forest style tree ensemble; probabilities are averaged
    /// across trees.
    Forest {
        trees: Vec<DecisionTree>,
        feature_importances: Vec<f64>,
    },
    /// Constant baseline that always predicts the training positive rate.
    /// Used as a stand-in when no trained model is available.
    Prior { positive_rate: f64 },
}

/// Which explainability signal the model exposes. Resolved once when the
/// artifact is constructed, never re-detected per request.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportanceSource {
    /// Non-negative per-feature weights from a tree ensemble.
    Tree(Vec<f64>),
    /// Signed per-feature coefficients from a linear model.
    Linear(Vec<f64>),
    /// The model exposes neither; every feature weighs the same.
    Uniform,
}

impl ImportanceSource {
    pub fn name(&self) -> &'static str {
        match self {
            ImportanceSource::Tree(_) => "tree",
            ImportanceSource::Linear(_) => "linear",
            ImportanceSource::Uniform => "uniform",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ModelFile {
    feature_names: Vec<String>,
    model: ModelParams,
}

/// Immutable trained-model artifact. Loaded once at startup and shared
/// read-only across all assessments; prediction takes `&self` and touches
/// no interior state.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    feature_names: Vec<String>,
    params: ModelParams,
    importance: ImportanceSource,
}

impl ModelArtifact {
    pub fn new(feature_names: Vec<String>, params: ModelParams) -> Result<Self, ArtifactError> {
        match &params {
            ModelParams::Logistic { coefficients, .. } => {
                if coefficients.len() != feature_names.len() {
                    return Err(ArtifactError::Malformed(format!(
                        "{} coefficients for {} features",
                        coefficients.len(),
                        feature_names.len()
                    )));
                }
            }
            ModelParams::Forest {
                trees,
                feature_importances,
            } => {
                if feature_importances.len() != feature_names.len() {
                    return Err(ArtifactError::Malformed(format!(
                        "{} importances for {} features",
                        feature_importances.len(),
                        feature_names.len()
                    )));
                }
                if trees.is_empty() {
                    return Err(ArtifactError::Malformed("forest has no trees".into()));
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(i)?;
                }
            }
            ModelParams::Prior { positive_rate } => {
                if !(0.0..=1.0).contains(positive_rate) {
                    return Err(ArtifactError::Malformed(format!(
                        "positive_rate {} outside [0, 1]",
                        positive_rate
                    )));
                }
            }
        }

        let importance = match &params {
            ModelParams::Forest {
                feature_importances,
                ..
            } => ImportanceSource::Tree(feature_importances.clone()),
            ModelParams::Logistic { coefficients, .. } => {
                ImportanceSource::Linear(coefficients.clone())
            }
            ModelParams::Prior { .. } => ImportanceSource::Uniform,
        };

        Ok(Self {
            feature_names,
            params,
            importance,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ArtifactError> {
        let file: ModelFile = serde_json::from_str(raw)?;
        Self::new(file.feature_names, file.model)
    }

    /// Verify the artifact's declared feature order against the crate's
    /// canonical schema. Called once at startup; a mismatch means the
    /// artifact was trained on a different vector layout and must never be
    /// served.
    pub fn validate_schema(&self, expected: &[&str]) -> Result<(), ArtifactError> {
        if self.feature_names.len() != expected.len() {
            return Err(ArtifactError::SchemaMismatch(format!(
                "artifact declares {} features, expected {}",
                self.feature_names.len(),
                expected.len()
            )));
        }
        for (i, (declared, expected)) in self.feature_names.iter().zip(expected).enumerate() {
            if declared != expected {
                return Err(ArtifactError::SchemaMismatch(format!(
                    "feature {} is '{}', expected '{}'",
                    i, declared, expected
                )));
            }
        }
        Ok(())
    }

    /// Class probabilities `[p_negative, p_positive]` for one scaled
    /// feature vector.
    pub fn predict_probability(&self, scaled: &FeatureVector) -> [f64; 2] {
        match &self.params {
            ModelParams::Logistic {
                coefficients,
                intercept,
            } => {
                let z: f64 = coefficients
                    .iter()
                    .zip(scaled.iter())
                    .map(|(c, x)| c * x)
                    .sum::<f64>()
                    + intercept;
                let p = 1.0 / (1.0 + (-z).exp());
                [1.0 - p, p]
            }
            ModelParams::Forest { trees, .. } => {
                let mut acc = [0.0, 0.0];
                for tree in trees {
                    let [neg, pos] = tree.predict(scaled);
                    acc[0] += neg;
                    acc[1] += pos;
                }
                let n = trees.len() as f64;
                [acc[0] / n, acc[1] / n]
            }
            ModelParams::Prior { positive_rate } => [1.0 - positive_rate, *positive_rate],
        }
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn importance(&self) -> &ImportanceSource {
        &self.importance
    }

    pub fn kind(&self) -> &'static str {
        match self.params {
            ModelParams::Logistic { .. } => "logistic",
            ModelParams::Forest { .. } => "forest",
            ModelParams::Prior { .. } => "prior",
        }
    }
}

/// Build a feature-name vector matching the canonical schema. Handy for
/// constructing in-memory artifacts in tests and fixtures.
pub fn canonical_feature_names() -> Vec<String> {
    crate::core::features::FEATURE_NAMES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logistic_artifact() -> ModelArtifact {
        ModelArtifact::new(
            canonical_feature_names(),
            ModelParams::Logistic {
                coefficients: vec![0.1, 0.2, -1.5, -0.3, 0.4, 0.3, 0.3, 0.4, 0.2, 0.5],
                intercept: -0.2,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_logistic_probabilities_complement() {
        let artifact = logistic_artifact();
        let [neg, pos] = artifact.predict_probability(&[0.0; 10]);
        assert!((neg + pos - 1.0).abs() < 1e-12);
        assert!(pos > 0.0 && pos < 1.0);
    }

    #[test]
    fn test_logistic_importance_is_linear() {
        let artifact = logistic_artifact();
        assert!(matches!(artifact.importance(), ImportanceSource::Linear(_)));
    }

    #[test]
    fn test_prior_importance_is_uniform() {
        let artifact = ModelArtifact::new(
            canonical_feature_names(),
            ModelParams::Prior { positive_rate: 0.3 },
        )
        .unwrap();
        assert_eq!(*artifact.importance(), ImportanceSource::Uniform);
        assert_eq!(artifact.predict_probability(&[0.0; 10]), [0.7, 0.3]);
    }

    #[test]
    fn test_coefficient_length_mismatch_rejected() {
        let result = ModelArtifact::new(
            canonical_feature_names(),
            ModelParams::Logistic {
                coefficients: vec![0.1, 0.2],
                intercept: 0.0,
            },
        );
        assert!(matches!(result, Err(ArtifactError::Malformed(_))));
    }

    #[test]
    fn test_schema_mismatch_detected() {
        let mut names = canonical_feature_names();
        names.swap(0, 1);
        let artifact = ModelArtifact::new(
            names,
            ModelParams::Prior { positive_rate: 0.5 },
        )
        .unwrap();
        let result = artifact.validate_schema(crate::core::features::FEATURE_NAMES);
        assert!(matches!(result, Err(ArtifactError::SchemaMismatch(_))));
    }

    #[test]
    fn test_single_stump_forest() {
        // One decision stump on hemoglobin (index 2): low hemoglobin leaf
        // is mostly positive, high hemoglobin leaf mostly negative.
        let stump = DecisionTree {
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature: vec![2, -2, -2],
            threshold: vec![11.5, 0.0, 0.0],
            value: vec![[0.0, 0.0], [10.0, 90.0], [80.0, 20.0]],
        };
        let artifact = ModelArtifact::new(
            canonical_feature_names(),
            ModelParams::Forest {
                trees: vec![stump],
                feature_importances: vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            },
        )
        .unwrap();

        let mut low_hb = [0.0; 10];
        low_hb[2] = 9.0;
        assert_eq!(artifact.predict_probability(&low_hb), [0.1, 0.9]);

        let mut high_hb = [0.0; 10];
        high_hb[2] = 14.0;
        assert_eq!(artifact.predict_probability(&high_hb), [0.8, 0.2]);
    }

    #[test]
    fn test_from_json_logistic() {
        let raw = r#"{
            "feature_names": ["age", "gender", "hemoglobin", "diet", "fatigue",
                              "dizziness", "pale_skin", "weakness",
                              "shortness_breath", "symptom_count"],
            "model": {
                "kind": "logistic",
                "coefficients": [0.1, 0.2, -1.5, -0.3, 0.4, 0.3, 0.3, 0.4, 0.2, 0.5],
                "intercept": -0.2
            }
        }"#;
        let artifact = ModelArtifact::from_json(raw).unwrap();
        assert_eq!(artifact.kind(), "logistic");
        assert!(artifact
            .validate_schema(crate::core::features::FEATURE_NAMES)
            .is_ok());
    }
}
