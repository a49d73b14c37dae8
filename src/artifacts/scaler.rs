use serde::{Deserialize, Serialize};

use crate::artifacts::ArtifactError;
use crate::core::features::{FeatureVector, FEATURE_COUNT};

/// Immutable standardization transform learned offline
/// (`x' = (x - mean) / scale`, elementwise).
///
/// Read-only after load; `transform` takes `&self` so concurrent use needs
/// no synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl ScalerArtifact {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        if mean.len() != scale.len() {
            return Err(ArtifactError::Malformed(format!(
                "scaler mean has {} entries, scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        if mean.len() != FEATURE_COUNT {
            return Err(ArtifactError::Malformed(format!(
                "scaler covers {} features, expected {}",
                mean.len(),
                FEATURE_COUNT
            )));
        }
        Ok(Self { mean, scale })
    }

    pub fn from_json(raw: &str) -> Result<Self, ArtifactError> {
        let scaler: ScalerArtifact = serde_json::from_str(raw)?;
        Self::new(scaler.mean, scaler.scale)
    }

    /// Identity scaler, for tests and unscaled models.
    pub fn identity() -> Self {
        Self {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }

    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize one feature vector. A stored scale of 0 acts as 1,
    /// matching how sklearn persists constant features.
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut scaled = *features;
        for (i, value) in scaled.iter_mut().enumerate() {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            *value = (*value - self.mean[i]) / scale;
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let scaler = ScalerArtifact::identity();
        let vector = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert_eq!(scaler.transform(&vector), vector);
    }

    #[test]
    fn test_standardization() {
        let mut mean = vec![0.0; 10];
        let mut scale = vec![1.0; 10];
        mean[0] = 40.0;
        scale[0] = 20.0;

        let scaler = ScalerArtifact::new(mean, scale).unwrap();
        let mut vector = [0.0; 10];
        vector[0] = 60.0;

        let scaled = scaler.transform(&vector);
        assert_eq!(scaled[0], 1.0);
        assert_eq!(scaled[1], 0.0);
    }

    #[test]
    fn test_zero_scale_acts_as_one() {
        let mut scale = vec![1.0; 10];
        scale[3] = 0.0;
        let scaler = ScalerArtifact::new(vec![1.0; 10], scale).unwrap();

        let vector = [2.0; 10];
        let scaled = scaler.transform(&vector);
        assert_eq!(scaled[3], 1.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = ScalerArtifact::new(vec![0.0; 10], vec![1.0; 9]);
        assert!(matches!(result, Err(ArtifactError::Malformed(_))));

        let result = ScalerArtifact::new(vec![0.0; 9], vec![1.0; 9]);
        assert!(matches!(result, Err(ArtifactError::Malformed(_))));
    }

    #[test]
    fn test_from_json() {
        let raw = r#"{
            "mean": [40.0, 0.5, 12.5, 1.0, 0.3, 0.2, 0.2, 0.3, 0.15, 1.2],
            "scale": [18.0, 0.5, 2.1, 0.7, 0.46, 0.4, 0.4, 0.46, 0.36, 1.5]
        }"#;
        let scaler = ScalerArtifact::from_json(raw).unwrap();
        assert_eq!(scaler.len(), 10);
    }
}
