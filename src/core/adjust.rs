use crate::models::{Gender, RiskLevel};

/// Upweight applied per unit of relative hemoglobin deficit below the
/// gender threshold.
const HB_DEFICIT_WEIGHT: f64 = 0.3;
/// Downweight applied per 5 g/dL of surplus above threshold + 1.
const HB_SURPLUS_WEIGHT: f64 = 0.2;
/// Flat raise when four or more symptoms are reported.
const HEAVY_SYMPTOM_RAISE: f64 = 0.15;
/// Flat relief when no symptoms are reported and hemoglobin is normal.
const NO_SYMPTOM_RELIEF: f64 = 0.1;

/// Apply the clinical heuristics on top of the model's base probability.
///
/// The model output is treated as an uncalibrated base signal; hemoglobin
/// (the primary anemia indicator) and the symptom count correct it
/// deterministically. The result is clamped into [0, 1] after every step.
///
/// Hemoglobin rules, mutually exclusive:
/// - below the gender threshold, risk rises proportionally to the relative
///   deficit, capped at +0.3;
/// - at or above threshold + 1, risk falls proportionally to the surplus.
///
/// Symptom rules, mutually exclusive and applied after the hemoglobin rule:
/// - 4 or more symptoms raise risk by a flat 0.15;
/// - zero symptoms with normal hemoglobin relieve risk by a flat 0.1.
pub fn adjust_probability(
    base_probability: f64,
    gender: Gender,
    hemoglobin: f64,
    symptom_count: u8,
) -> f64 {
    let threshold = gender.hemoglobin_threshold();
    let mut p = base_probability;

    if hemoglobin < threshold {
        let deficit = (threshold - hemoglobin) / threshold * HB_DEFICIT_WEIGHT;
        p = (p + deficit).min(1.0);
    } else if hemoglobin >= threshold + 1.0 {
        let surplus = (hemoglobin - threshold) / 5.0 * HB_SURPLUS_WEIGHT;
        p = (p - surplus).max(0.0);
    }

    if symptom_count >= 4 {
        p = (p + HEAVY_SYMPTOM_RAISE).min(1.0);
    } else if symptom_count == 0 && hemoglobin >= threshold {
        p = (p - NO_SYMPTOM_RELIEF).max(0.0);
    }

    p
}

/// Classify an adjusted probability into the discrete risk level.
pub fn classify(probability: f64) -> RiskLevel {
    RiskLevel::from_probability(probability)
}
