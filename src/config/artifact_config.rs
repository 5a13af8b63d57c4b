//! Model artifact locations.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ArtifactEnvConfig {
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model/best_rf.json"),
            scaler_path: PathBuf::from("model/scaler.json"),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            scaler_path: env::var("SCALER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scaler_path),
        }
    }
}
