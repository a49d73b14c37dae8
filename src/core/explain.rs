use crate::artifacts::ImportanceSource;
use crate::core::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use crate::models::TopFactor;

/// Maximum number of factors surfaced to the user.
const TOP_FACTORS: usize = 5;

/// Rank the input features by their contribution to the decision.
///
/// The importance source was resolved once at artifact load:
/// - tree importances are weighted by how extreme the *unscaled* feature
///   value is (`base * (1 + normalized)`);
/// - linear coefficients are weighted by the raw value (`|coef * value|`);
/// - with neither capability every feature weighs the same.
///
/// Weights are normalized to percentages summing to 100 over the full
/// feature set, sorted descending (ties keep declaration order), and
/// truncated to the top five.
pub fn rank_factors(source: &ImportanceSource, unscaled: &FeatureVector) -> Vec<TopFactor> {
    let mut weights = [0.0f64; FEATURE_COUNT];

    match source {
        ImportanceSource::Tree(importances) => {
            for (i, weight) in weights.iter_mut().enumerate() {
                *weight = importances[i] * (1.0 + normalized_magnitude(i, unscaled[i]));
            }
        }
        ImportanceSource::Linear(coefficients) => {
            for (i, weight) in weights.iter_mut().enumerate() {
                *weight = (coefficients[i] * unscaled[i]).abs();
            }
        }
        ImportanceSource::Uniform => {
            weights = [1.0; FEATURE_COUNT];
        }
    }

    let total: f64 = weights.iter().sum();
    let percents: Vec<f64> = if total > 0.0 {
        weights.iter().map(|w| w / total * 100.0).collect()
    } else {
        // Degenerate weights (e.g. an all-zero importance vector): fall
        // back to a uniform distribution
        vec![100.0 / FEATURE_COUNT as f64; FEATURE_COUNT]
    };

    let mut ranked: Vec<(usize, f64)> = percents.into_iter().enumerate().collect();
    // Stable sort keeps declaration order for equal percentages
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(TOP_FACTORS);

    ranked
        .into_iter()
        .map(|(i, importance)| TopFactor {
            label: display_label(FEATURE_NAMES[i]),
            importance,
        })
        .collect()
}

/// Rough per-feature magnitude normalization for the tree path. Symptom
/// flags are already 0/1 and pass through unchanged.
fn normalized_magnitude(index: usize, value: f64) -> f64 {
    match FEATURE_NAMES[index] {
        "age" => value.abs() / 80.0,
        "hemoglobin" => value.abs() / 18.0,
        "fatigue" | "dizziness" | "pale_skin" | "weakness" | "shortness_breath" => value,
        _ => (value.abs() / 5.0).min(1.0),
    }
}

/// Static display labels for the frontend. Identifiers without a label
/// (the engineered `symptom_count`) pass through unchanged.
fn display_label(name: &str) -> String {
    match name {
        "age" => "Age",
        "gender" => "Gender",
        "hemoglobin" => "Hemoglobin Level",
        "diet" => "Diet Quality",
        "fatigue" => "Fatigue",
        "dizziness" => "Dizziness",
        "pale_skin" => "Pale Skin",
        "weakness" => "Weakness",
        "shortness_breath" => "Shortness of Breath",
        other => other,
    }
    .to_string()
}
