#![allow(dead_code)]

use loan_default_api::application::ml::ModelStore;
use loan_default_api::config::ArtifactEnvConfig;
use loan_default_api::domain::ml::FEATURE_NAMES;
use loan_default_api::infrastructure::observability::Metrics;
use loan_default_api::interfaces::http::AppState;
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

pub const CREDIT_SCORE: usize = 3;
pub const DTI_RATIO: usize = 8;

/// Applicant from the API docs: good credit, low DTI
pub const LOW_RISK: [f64; 16] = [
    35.0, 50000.0, 10000.0, 650.0, 24.0, 3.0, 5.5, 36.0, 0.3, 1.0, 0.0, 1.0, 0.0, 1.0, 2.0, 0.0,
];

/// Same applicant with poor credit and high DTI
pub fn high_risk() -> Vec<f64> {
    let mut v = LOW_RISK.to_vec();
    v[CREDIT_SCORE] = 500.0;
    v[DTI_RATIO] = 0.9;
    v
}

fn names() -> Vec<&'static str> {
    FEATURE_NAMES.to_vec()
}

/// Scaler centring CreditScore on 600 (scale 50) and DTIRatio on 0.5 (scale 0.1)
pub fn scaler_json() -> Value {
    let mut mean = vec![0.0; 16];
    let mut scale = vec![1.0; 16];
    mean[CREDIT_SCORE] = 600.0;
    scale[CREDIT_SCORE] = 50.0;
    mean[DTI_RATIO] = 0.5;
    scale[DTI_RATIO] = 0.1;
    json!({ "mean": mean, "scale": scale, "feature_names": names() })
}

fn stump(feature: usize, left: [f64; 2], right: [f64; 2]) -> Value {
    json!({
        "children_left": [1, -1, -1],
        "children_right": [2, -1, -1],
        "feature": [feature, -2, -2],
        "threshold": [0.0, -2.0, -2.0],
        "value": [[50.0, 50.0], left, right]
    })
}

/// Two stumps in scaled space:
/// low credit score -> 0.8 default, otherwise 0.1;
/// low DTI -> 0.3 default, otherwise 0.9.
pub fn forest_json() -> Value {
    json!({
        "n_features": 16,
        "classes": [0, 1],
        "feature_names": names(),
        "trees": [
            stump(CREDIT_SCORE, [20.0, 80.0], [90.0, 10.0]),
            stump(DTI_RATIO, [70.0, 30.0], [10.0, 90.0])
        ]
    })
}

pub fn write_json(path: &Path, value: &Value) {
    std::fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
}

/// Writes both fixture artifacts into a fresh temp dir.
pub fn fixture_artifacts() -> (TempDir, ArtifactEnvConfig) {
    let dir = TempDir::new().unwrap();
    let config = ArtifactEnvConfig {
        model_path: dir.path().join("best_rf.json"),
        scaler_path: dir.path().join("scaler.json"),
    };
    write_json(&config.model_path, &forest_json());
    write_json(&config.scaler_path, &scaler_json());
    (dir, config)
}

pub fn fixture_state() -> AppState {
    let (_dir, config) = fixture_artifacts();
    let store = ModelStore::load(&config).expect("fixture artifacts load");
    AppState {
        store,
        metrics: Metrics::new().unwrap(),
    }
}
