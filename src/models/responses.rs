use serde::{Deserialize, Serialize};

use crate::models::domain::{RiskAssessment, RiskLevel, TopFactor};

/// Serialized form of one ranked factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorResponse {
    pub factor: String,
    pub importance: f64,
}

/// Presentation form of a [`RiskAssessment`], with the rounding the clients
/// expect: risk score to 2 decimals, probability to 4, importances to 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub probability: f64,
    pub top_factors: Vec<FactorResponse>,
    pub recommendations: Vec<String>,
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

impl From<RiskAssessment> for AssessmentResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            risk_level: assessment.risk_level,
            risk_score: round_to(assessment.risk_score, 2),
            probability: round_to(assessment.probability, 4),
            top_factors: assessment
                .top_factors
                .into_iter()
                .map(|TopFactor { label, importance }| FactorResponse {
                    factor: label,
                    importance: round_to(importance, 2),
                })
                .collect(),
            recommendations: assessment.recommendations,
            assessed_at: chrono::Utc::now(),
        }
    }
}

/// Error payload for callers that surface failures as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
