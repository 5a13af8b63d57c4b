use super::forest_classifier::ForestClassifier;
use super::predictor::{DefaultClassifier, FeatureScaler};
use super::standard_scaler::StandardScaler;
use crate::config::ArtifactEnvConfig;
use crate::domain::errors::{ArtifactError, InferenceError};
use crate::domain::ml::{FEATURE_COUNT, FeatureVector, Inference};
use std::sync::Arc;
use tracing::info;

/// Process-wide, read-only holder of the fitted scaler and classifier.
///
/// Built once before the server binds; cloning shares the same artifacts.
#[derive(Clone)]
pub struct ModelStore {
    scaler: Arc<dyn FeatureScaler>,
    classifier: Arc<dyn DefaultClassifier>,
}

impl ModelStore {
    pub fn new(
        scaler: Arc<dyn FeatureScaler>,
        classifier: Arc<dyn DefaultClassifier>,
    ) -> Result<Self, ArtifactError> {
        if scaler.n_features() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "scaler",
                expected: FEATURE_COUNT,
                actual: scaler.n_features(),
            });
        }
        if classifier.n_features() != FEATURE_COUNT {
            return Err(ArtifactError::DimensionMismatch {
                artifact: "classifier",
                expected: FEATURE_COUNT,
                actual: classifier.n_features(),
            });
        }
        Ok(Self { scaler, classifier })
    }

    /// Load both artifacts from the configured paths.
    pub fn load(config: &ArtifactEnvConfig) -> Result<Self, ArtifactError> {
        let scaler = StandardScaler::load(&config.scaler_path)?;
        let classifier = ForestClassifier::load(&config.model_path)?;
        info!(
            "Model store ready: {} {} ({} trees, {} features)",
            classifier.name(),
            classifier.version(),
            classifier.n_trees(),
            classifier.n_features()
        );
        Self::new(Arc::new(scaler), Arc::new(classifier))
    }

    /// Scale the raw vector, then classify it. Pure function of input and loaded state.
    pub fn transform_and_predict(
        &self,
        features: &FeatureVector,
    ) -> Result<Inference, InferenceError> {
        let scaled = self.scaler.transform(features.as_slice())?;
        if let Some(index) = scaled.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite { index });
        }
        self.classifier.predict(&scaled)
    }

    pub fn model_name(&self) -> &str {
        self.classifier.name()
    }

    pub fn model_version(&self) -> &str {
        self.classifier.version()
    }
}
