use std::sync::Arc;

use tracing::debug;

use crate::artifacts::{ArtifactError, ModelArtifact, ScalerArtifact};
use crate::core::{
    adjust::{adjust_probability, classify},
    explain::rank_factors,
    features::{build_vector, parse_request, ValidationError, FEATURE_NAMES},
    recommend::build_recommendations,
};
use crate::models::{RiskAssessment, ScreeningRequest};

/// Run the full inference pipeline for one screening request.
///
/// Pure and deterministic given its three arguments: identical input and
/// artifacts produce an identical assessment. The only failure mode is
/// request validation; everything past a valid input is total.
pub fn assess_risk(
    request: &ScreeningRequest,
    model: &ModelArtifact,
    scaler: &ScalerArtifact,
) -> Result<RiskAssessment, ValidationError> {
    let input = parse_request(request)?;
    let vector = build_vector(&input);

    let scaled = scaler.transform(&vector);
    let [_, base_probability] = model.predict_probability(&scaled);

    let probability = adjust_probability(
        base_probability,
        input.gender,
        input.resolved_hemoglobin(),
        input.symptom_count(),
    );
    let risk_level = classify(probability);

    // Importance ranking works on the unscaled vector
    let top_factors = rank_factors(model.importance(), &vector);
    let recommendations = build_recommendations(risk_level, &input);

    debug!(
        base_probability,
        probability,
        risk_level = %risk_level,
        "Assessment complete"
    );

    Ok(RiskAssessment {
        risk_level,
        probability,
        risk_score: probability * 100.0,
        top_factors,
        recommendations,
    })
}

/// Shared-artifact handle for serving many assessments.
///
/// Construction verifies the model's declared feature schema against the
/// crate's canonical order exactly once; after that, assessments need no
/// locking and no per-request schema checks.
#[derive(Debug, Clone)]
pub struct Assessor {
    model: Arc<ModelArtifact>,
    scaler: Arc<ScalerArtifact>,
}

impl Assessor {
    pub fn new(
        model: Arc<ModelArtifact>,
        scaler: Arc<ScalerArtifact>,
    ) -> Result<Self, ArtifactError> {
        model.validate_schema(FEATURE_NAMES)?;
        Ok(Self { model, scaler })
    }

    pub fn assess(&self, request: &ScreeningRequest) -> Result<RiskAssessment, ValidationError> {
        assess_risk(request, &self.model, &self.scaler)
    }

    pub fn model(&self) -> &ModelArtifact {
        &self.model
    }
}
