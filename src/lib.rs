//! HemoScan Core - anemia risk inference engine
//!
//! This library turns self-reported clinical and lifestyle signals into a
//! discrete anemia-risk category with an explainable factor ranking and
//! advisory messages. The pipeline is pure and CPU-bound: feature
//! vectorization, model-based base probability, deterministic clinical
//! adjustment, risk classification, importance ranking, recommendations.
//! Model and scaler artifacts are loaded once at startup and shared
//! read-only across concurrent assessments.

pub mod artifacts;
pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::artifacts::{
    load_artifacts, ArtifactError, ImportanceSource, ModelArtifact, ScalerArtifact,
};
pub use crate::core::{assess_risk, Assessor, ValidationError, FEATURE_NAMES};
pub use crate::models::{
    AssessmentResponse, Diet, Gender, RiskAssessment, RiskLevel, ScreeningInput, ScreeningRequest,
};
