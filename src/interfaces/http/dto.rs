use crate::domain::errors::InferenceError;
use crate::domain::ml::FEATURE_NAMES;
use serde::{Deserialize, Serialize};

/// `POST /predict` request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoanInput {
    pub features: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// Returned with HTTP 200 when the feature count is wrong.
#[derive(Debug, Serialize)]
pub struct FeatureOrderError {
    pub error: String,
    pub order: &'static [&'static str],
}

impl FeatureOrderError {
    pub fn new(err: &InferenceError) -> Self {
        Self {
            error: err.to_string(),
            order: &FEATURE_NAMES,
        }
    }
}

/// Body of 422/500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
