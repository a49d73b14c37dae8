use crate::models::{Diet, RiskLevel, ScreeningInput};

/// Hemoglobin level below which the low-hemoglobin advisory is appended,
/// regardless of gender.
const LOW_HEMOGLOBIN_ADVISORY_LEVEL: f64 = 12.0;
/// Symptom count from which the multi-symptom advisory is appended.
const MULTI_SYMPTOM_ADVISORY_COUNT: u8 = 3;

/// Build the ordered advisory list for one assessment.
///
/// Four fixed messages per risk level form the base; three independent
/// checks (low hemoglobin, poor diet, multiple symptoms) append further
/// messages in that fixed order. No de-duplication or localization.
pub fn build_recommendations(risk_level: RiskLevel, input: &ScreeningInput) -> Vec<String> {
    let base: [&str; 4] = match risk_level {
        RiskLevel::High => [
            "Consult a healthcare professional immediately",
            "Consider iron supplements (with doctor's approval)",
            "Increase iron-rich foods in your diet",
            "Consume vitamin C-rich foods to enhance iron absorption",
        ],
        RiskLevel::Moderate => [
            "Monitor your symptoms and consult a doctor if they worsen",
            "Improve your diet with iron-rich foods",
            "Schedule a blood test for accurate diagnosis",
            "Maintain a balanced diet and stay hydrated",
        ],
        RiskLevel::Low => [
            "Continue maintaining a healthy lifestyle",
            "Keep a balanced diet rich in iron",
            "Stay hydrated and get adequate rest",
            "Regular health checkups are recommended",
        ],
    };

    let mut recommendations: Vec<String> = base.iter().map(|s| s.to_string()).collect();

    if input.resolved_hemoglobin() < LOW_HEMOGLOBIN_ADVISORY_LEVEL {
        recommendations
            .push("Your hemoglobin level is below normal - consult a doctor".to_string());
    }

    if input.diet == Diet::Poor {
        recommendations.push("Focus on improving your nutritional intake".to_string());
    }

    if input.symptom_count() >= MULTI_SYMPTOM_ADVISORY_COUNT {
        recommendations.push("Multiple symptoms detected - seek medical attention".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn input(hemoglobin: Option<f64>, diet: Diet, symptoms: u8) -> ScreeningInput {
        ScreeningInput {
            age: 30,
            gender: Gender::Female,
            hemoglobin,
            diet,
            fatigue: symptoms >= 1,
            dizziness: symptoms >= 2,
            pale_skin: symptoms >= 3,
            weakness: symptoms >= 4,
            shortness_breath: symptoms >= 5,
            rural_mode: false,
        }
    }

    #[test]
    fn test_base_list_has_four_messages() {
        let recs = build_recommendations(RiskLevel::Low, &input(Some(13.0), Diet::Good, 0));
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0], "Continue maintaining a healthy lifestyle");
    }

    #[test]
    fn test_all_advisories_appended_in_order() {
        let recs = build_recommendations(RiskLevel::High, &input(Some(8.0), Diet::Poor, 4));
        assert_eq!(recs.len(), 7);
        assert_eq!(
            recs[4],
            "Your hemoglobin level is below normal - consult a doctor"
        );
        assert_eq!(recs[5], "Focus on improving your nutritional intake");
        assert_eq!(recs[6], "Multiple symptoms detected - seek medical attention");
    }

    #[test]
    fn test_multi_symptom_advisory_needs_three() {
        let two = build_recommendations(RiskLevel::Moderate, &input(Some(13.0), Diet::Good, 2));
        assert_eq!(two.len(), 4);

        let three = build_recommendations(RiskLevel::Moderate, &input(Some(13.0), Diet::Good, 3));
        assert_eq!(three.len(), 5);
    }

    #[test]
    fn test_placeholder_hemoglobin_skips_advisory() {
        // Rural substitution lands exactly on 12.0, which is not below the
        // advisory level
        let recs = build_recommendations(RiskLevel::Low, &input(None, Diet::Good, 0));
        assert_eq!(recs.len(), 4);
    }
}
