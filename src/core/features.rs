use thiserror::Error;

use crate::models::{Diet, Gender, ScreeningInput, ScreeningRequest, Symptom};

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 10;

/// Fixed-length feature vector in the canonical order of [`FEATURE_NAMES`].
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Canonical feature order. Artifacts declare their own feature-name list
/// and are validated against this once at startup; request handling indexes
/// by position and never by name.
pub const FEATURE_NAMES: &[&str] = &[
    "age",
    "gender",
    "hemoglobin",
    "diet",
    "fatigue",
    "dizziness",
    "pale_skin",
    "weakness",
    "shortness_breath",
    "symptom_count",
];

/// Errors raised while validating a screening request. These are the only
/// per-request failures the pipeline can produce; everything downstream of
/// a valid input is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

/// Validate a raw request and produce the typed screening input.
///
/// Required fields are age, gender, diet, symptoms and rural_mode;
/// hemoglobin is optional (rural screenings have no lab value). Gender and
/// diet parse leniently, unrecognized symptom tokens are dropped silently.
pub fn parse_request(request: &ScreeningRequest) -> Result<ScreeningInput, ValidationError> {
    let age = request.age.ok_or(ValidationError::MissingField("age"))?;
    if age > 120 {
        return Err(ValidationError::InvalidValue {
            field: "age",
            message: format!("{} is outside the supported range 0-120", age),
        });
    }

    let gender = request
        .gender
        .as_deref()
        .ok_or(ValidationError::MissingField("gender"))
        .map(Gender::parse)?;

    let diet = request
        .diet
        .as_deref()
        .ok_or(ValidationError::MissingField("diet"))
        .map(Diet::parse)?;

    let symptoms = request
        .symptoms
        .as_deref()
        .ok_or(ValidationError::MissingField("symptoms"))?;

    let rural_mode = request
        .rural_mode
        .ok_or(ValidationError::MissingField("rural_mode"))?;

    let has = |symptom: Symptom| {
        symptoms
            .iter()
            .any(|raw| Symptom::parse(raw) == Some(symptom))
    };

    Ok(ScreeningInput {
        age: age as u8,
        gender,
        hemoglobin: request.hemoglobin,
        diet,
        fatigue: has(Symptom::Fatigue),
        dizziness: has(Symptom::Dizziness),
        pale_skin: has(Symptom::PaleSkin),
        weakness: has(Symptom::Weakness),
        shortness_breath: has(Symptom::ShortnessBreath),
        rural_mode,
    })
}

/// Build the model-facing vector from a validated input, in
/// [`FEATURE_NAMES`] order. The symptom count rides along as an engineered
/// feature the model was trained with.
pub fn build_vector(input: &ScreeningInput) -> FeatureVector {
    let flag = |s: bool| if s { 1.0 } else { 0.0 };
    [
        input.age as f64,
        input.gender.as_feature(),
        input.resolved_hemoglobin(),
        input.diet.as_feature(),
        flag(input.fatigue),
        flag(input.dizziness),
        flag(input.pale_skin),
        flag(input.weakness),
        flag(input.shortness_breath),
        input.symptom_count() as f64,
    ]
}
