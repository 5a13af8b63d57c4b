use crate::domain::errors::InferenceError;
use crate::domain::ml::Inference;

/// Interface for fitted feature scalers
pub trait FeatureScaler: Send + Sync {
    /// Map a raw vector to the normalized space the classifier was trained in
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;

    /// Number of features the scaler was fitted on
    fn n_features(&self) -> usize;
}

/// Interface for binary default classifiers
pub trait DefaultClassifier: Send + Sync {
    /// Predict class and positive-class probability for a normalized vector
    fn predict(&self, features: &[f64]) -> Result<Inference, InferenceError>;

    /// Number of features the classifier was trained on
    fn n_features(&self) -> usize;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
