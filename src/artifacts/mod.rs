// Artifact loading and read-only model/scaler wrappers
pub mod model;
pub mod scaler;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

pub use model::{canonical_feature_names, DecisionTree, ImportanceSource, ModelArtifact, ModelParams};
pub use scaler::ScalerArtifact;

use crate::core::features::FEATURE_NAMES;

/// Errors that can occur while loading artifacts. All of these are fatal at
/// startup; none can surface per request.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Malformed artifact: {0}")]
    Malformed(String),
}

/// Load the model artifact from a JSON file and validate it against the
/// crate's canonical feature schema.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<ModelArtifact, ArtifactError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let artifact = ModelArtifact::from_json(&raw)?;
    artifact.validate_schema(FEATURE_NAMES)?;

    info!(
        path = %path.as_ref().display(),
        kind = artifact.kind(),
        importance = artifact.importance().name(),
        "Model artifact loaded"
    );
    Ok(artifact)
}

/// Load the scaler artifact from a JSON file.
pub fn load_scaler<P: AsRef<Path>>(path: P) -> Result<ScalerArtifact, ArtifactError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let artifact = ScalerArtifact::from_json(&raw)?;

    info!(path = %path.as_ref().display(), "Scaler artifact loaded");
    Ok(artifact)
}

/// Load both artifacts, wrapped for shared, lock-free concurrent use.
///
/// Any failure here must keep the process from serving traffic.
pub fn load_artifacts<P: AsRef<Path>>(
    model_path: P,
    scaler_path: P,
) -> Result<(Arc<ModelArtifact>, Arc<ScalerArtifact>), ArtifactError> {
    let model = load_model(model_path)?;
    let scaler = load_scaler(scaler_path)?;
    Ok((Arc::new(model), Arc::new(scaler)))
}
