// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Diet, Gender, RiskAssessment, RiskLevel, ScreeningInput, Symptom, TopFactor,
    HEMOGLOBIN_PLACEHOLDER,
};
pub use requests::ScreeningRequest;
pub use responses::{AssessmentResponse, ErrorResponse, FactorResponse};
