use super::artifact::read_json_artifact;
use super::predictor::FeatureScaler;
use crate::domain::errors::{ArtifactError, InferenceError};
use crate::domain::ml::feature_registry::check_feature_names;
use serde::Deserialize;
use std::path::Path;

const ARTIFACT: &str = "scaler";

/// On-disk form of a fitted standard scaler (per-feature mean and scale).
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

/// Standardizes features as `(x - mean) / scale`.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let artifact: ScalerArtifact = read_json_artifact(ARTIFACT, path)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ScalerArtifact) -> Result<Self, ArtifactError> {
        let invalid = |reason: String| ArtifactError::Invalid {
            artifact: ARTIFACT,
            reason,
        };

        if artifact.mean.is_empty() {
            return Err(invalid("mean is empty".to_string()));
        }
        if artifact.mean.len() != artifact.scale.len() {
            return Err(invalid(format!(
                "mean has {} entries but scale has {}",
                artifact.mean.len(),
                artifact.scale.len()
            )));
        }
        if let Some(idx) = artifact.mean.iter().position(|v| !v.is_finite()) {
            return Err(invalid(format!("mean[{}] is not finite", idx)));
        }
        if let Some(idx) = artifact.scale.iter().position(|v| !v.is_finite()) {
            return Err(invalid(format!("scale[{}] is not finite", idx)));
        }
        if let Some(names) = &artifact.feature_names {
            check_feature_names(names).map_err(invalid)?;
        }

        // Constant features were fitted with zero variance
        let scale = artifact
            .scale
            .into_iter()
            .map(|s| if s == 0.0 { 1.0 } else { s })
            .collect();

        Ok(Self {
            mean: artifact.mean,
            scale,
        })
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.mean.len() {
            return Err(InferenceError::FeatureCount {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    fn n_features(&self) -> usize {
        self.mean.len()
    }
}
