use serde::{Deserialize, Serialize};

/// Biological sex as used by the screening model.
///
/// The WHO anemia thresholds are sex-specific, so this drives both the
/// feature encoding and the hemoglobin threshold selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Lenient parse: "female"/"f" (any case) map to Female, everything
    /// else to Male. Mirrors the intake form, which free-types this field.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "female" | "f" => Gender::Female,
            _ => Gender::Male,
        }
    }

    /// Encoding the model was trained on: Female=0, Male=1.
    pub fn as_feature(self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }

    /// WHO anemia threshold in g/dL.
    pub fn hemoglobin_threshold(self) -> f64 {
        match self {
            Gender::Female => 12.0,
            Gender::Male => 13.0,
        }
    }
}

/// Self-reported diet quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Poor,
    Moderate,
    Good,
}

impl Diet {
    /// Lenient parse: unrecognized values fall back to Moderate rather
    /// than erroring, so odd free-text answers ("vegan") still screen.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "poor" => Diet::Poor,
            "good" => Diet::Good,
            _ => Diet::Moderate,
        }
    }

    pub fn as_feature(self) -> f64 {
        match self {
            Diet::Poor => 0.0,
            Diet::Moderate => 1.0,
            Diet::Good => 2.0,
        }
    }
}

/// The five symptoms the screening form asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fatigue,
    Dizziness,
    PaleSkin,
    Weakness,
    ShortnessBreath,
}

impl Symptom {
    /// Recognized symptom tokens; anything else in the request list is
    /// ignored silently.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "fatigue" => Some(Symptom::Fatigue),
            "dizziness" => Some(Symptom::Dizziness),
            "pale_skin" => Some(Symptom::PaleSkin),
            "weakness" => Some(Symptom::Weakness),
            "shortness_breath" => Some(Symptom::ShortnessBreath),
            _ => None,
        }
    }
}

/// Hemoglobin value substituted when no lab measurement is available
/// (rural mode, or the field simply omitted). A documented simplification,
/// not an estimate derived from the other inputs.
pub const HEMOGLOBIN_PLACEHOLDER: f64 = 12.0;

/// Validated, typed screening input. Produced by the feature builder from a
/// raw [`ScreeningRequest`](crate::models::ScreeningRequest); never
/// constructed from unchecked request data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningInput {
    pub age: u8,
    pub gender: Gender,
    /// Lab-measured hemoglobin in g/dL, if available.
    pub hemoglobin: Option<f64>,
    pub diet: Diet,
    pub fatigue: bool,
    pub dizziness: bool,
    pub pale_skin: bool,
    pub weakness: bool,
    pub shortness_breath: bool,
    /// Operating mode where lab measurement is assumed unavailable.
    pub rural_mode: bool,
}

impl ScreeningInput {
    /// Hemoglobin value the pipeline actually computes with: the measured
    /// value when present, otherwise the fixed placeholder.
    pub fn resolved_hemoglobin(&self) -> f64 {
        self.hemoglobin.unwrap_or(HEMOGLOBIN_PLACEHOLDER)
    }

    /// Number of reported symptoms (0..=5).
    pub fn symptom_count(&self) -> u8 {
        [
            self.fatigue,
            self.dizziness,
            self.pale_skin,
            self.weakness,
            self.shortness_breath,
        ]
        .iter()
        .filter(|&&s| s)
        .count() as u8
    }
}

/// Discrete risk category derived from the adjusted probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Partition of [0, 1]: Low below 0.25, High from 0.65, Moderate
    /// between. No gaps, no overlaps.
    pub fn from_probability(p: f64) -> Self {
        if p < 0.25 {
            RiskLevel::Low
        } else if p < 0.65 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked contributing factor, as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFactor {
    pub label: String,
    /// Share of total importance, in percent.
    pub importance: f64,
}

/// Complete assessment result for one screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// Adjusted probability of anemia, in [0, 1].
    pub probability: f64,
    /// `probability * 100`, kept for display.
    pub risk_score: f64,
    /// At most five factors, highest importance first.
    pub top_factors: Vec<TopFactor>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_lenient() {
        assert_eq!(Gender::parse("Female"), Gender::Female);
        assert_eq!(Gender::parse("f"), Gender::Female);
        assert_eq!(Gender::parse("F"), Gender::Female);
        assert_eq!(Gender::parse("male"), Gender::Male);
        // Anything unrecognized maps to Male
        assert_eq!(Gender::parse("other"), Gender::Male);
    }

    #[test]
    fn test_diet_parse_defaults_to_moderate() {
        assert_eq!(Diet::parse("POOR"), Diet::Poor);
        assert_eq!(Diet::parse("good"), Diet::Good);
        assert_eq!(Diet::parse("vegan"), Diet::Moderate);
        assert_eq!(Diet::parse(""), Diet::Moderate);
    }

    #[test]
    fn test_symptom_parse_unknown_is_none() {
        assert_eq!(Symptom::parse("fatigue"), Some(Symptom::Fatigue));
        assert_eq!(Symptom::parse("headache"), None);
    }

    #[test]
    fn test_risk_level_partition() {
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.2499), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.25), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.6499), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.65), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn test_resolved_hemoglobin_placeholder() {
        let input = ScreeningInput {
            age: 30,
            gender: Gender::Female,
            hemoglobin: None,
            diet: Diet::Moderate,
            fatigue: false,
            dizziness: false,
            pale_skin: false,
            weakness: false,
            shortness_breath: false,
            rural_mode: true,
        };
        assert_eq!(input.resolved_hemoglobin(), HEMOGLOBIN_PLACEHOLDER);
        assert_eq!(input.symptom_count(), 0);
    }
}
