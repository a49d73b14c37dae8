// Core inference pipeline exports
pub mod adjust;
pub mod explain;
pub mod features;
pub mod pipeline;
pub mod recommend;

pub use adjust::{adjust_probability, classify};
pub use explain::rank_factors;
pub use features::{build_vector, parse_request, FeatureVector, ValidationError, FEATURE_COUNT, FEATURE_NAMES};
pub use pipeline::{assess_risk, Assessor};
pub use recommend::build_recommendations;
