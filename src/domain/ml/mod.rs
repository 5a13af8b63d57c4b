pub mod feature_registry;
pub mod prediction;

pub use feature_registry::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
pub use prediction::{DefaultPrediction, Inference, LoanLabel};
