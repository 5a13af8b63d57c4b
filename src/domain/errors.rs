use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading model artifacts at startup.
/// All of them are fatal: the service never starts serving without both artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("{artifact} artifact not found at {}", path.display())]
    NotFound {
        artifact: &'static str,
        path: PathBuf,
    },

    #[error("Failed to read {artifact} artifact {}: {source}", path.display())]
    Io {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {artifact} artifact {}: {source}", path.display())]
    Decode {
        artifact: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {artifact} artifact: {reason}")]
    Invalid {
        artifact: &'static str,
        reason: String,
    },

    #[error("{artifact} expects {actual} features, service requires {expected}")]
    DimensionMismatch {
        artifact: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while serving a single prediction request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Expected {expected} features in this order")]
    FeatureCount { expected: usize, actual: usize },

    #[error("Scaled feature at position {index} is not finite")]
    NonFinite { index: usize },

    #[error("Scaled feature at position {index} exceeds f32 range")]
    OutOfRange { index: usize },
}
