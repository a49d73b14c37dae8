use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw screening request as submitted by a client.
///
/// Every domain field is optional at this layer so that the feature builder
/// can report *which* required field is missing instead of serde rejecting
/// the whole payload. Free-text fields (gender, diet, symptoms) stay strings
/// here; typing happens in the feature builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ScreeningRequest {
    #[validate(range(min = 0, max = 120))]
    pub age: Option<u32>,
    pub gender: Option<String>,
    /// Lab hemoglobin in g/dL; omitted in rural mode.
    pub hemoglobin: Option<f64>,
    pub diet: Option<String>,
    pub symptoms: Option<Vec<String>>,
    pub rural_mode: Option<bool>,
}

impl ScreeningRequest {
    /// Convenience constructor used by tests and the CLI examples.
    pub fn new(
        age: u32,
        gender: &str,
        hemoglobin: Option<f64>,
        diet: &str,
        symptoms: &[&str],
        rural_mode: bool,
    ) -> Self {
        Self {
            age: Some(age),
            gender: Some(gender.to_string()),
            hemoglobin,
            diet: Some(diet.to_string()),
            symptoms: Some(symptoms.iter().map(|s| s.to_string()).collect()),
            rural_mode: Some(rural_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_fields() {
        // Missing fields deserialize to None; validation is the feature
        // builder's job, not serde's.
        let req: ScreeningRequest = serde_json::from_str(r#"{"age": 30}"#).unwrap();
        assert_eq!(req.age, Some(30));
        assert!(req.gender.is_none());
        assert!(req.symptoms.is_none());
    }

    #[test]
    fn test_validate_age_range() {
        let req = ScreeningRequest::new(130, "female", None, "good", &[], false);
        assert!(req.validate().is_err());

        let req = ScreeningRequest::new(30, "female", None, "good", &[], false);
        assert!(req.validate().is_ok());
    }
}
