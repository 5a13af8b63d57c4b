pub mod artifact;
pub mod forest_classifier;
pub mod model_store;
pub mod predictor;
pub mod standard_scaler;

pub use forest_classifier::ForestClassifier;
pub use model_store::ModelStore;
pub use predictor::{DefaultClassifier, FeatureScaler};
pub use standard_scaler::StandardScaler;
