mod common;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test, web};
use loan_default_api::domain::ml::{FEATURE_NAMES, LoanLabel};
use loan_default_api::infrastructure::observability::RejectReason;
use loan_default_api::interfaces::http::{configure, cors};
use serde_json::{Value, json};

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(cors())
                .app_data(web::Data::new($state))
                .configure(configure),
        )
        .await
    };
}

fn predict_request(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/predict").set_json(body)
}

#[actix_web::test]
async fn test_root_message() {
    let app = init_app!(common::fixture_state());
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"message": "Loan Default Prediction API is running"})
    );
}

#[actix_web::test]
async fn test_health_payload() {
    let app = init_app!(common::fixture_state());
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "ok", "message": "Backend is awake"}));
}

#[actix_web::test]
async fn test_predict_low_risk_applicant() {
    let app = init_app!(common::fixture_state());
    let body: Value = test::call_and_read_body_json(
        &app,
        predict_request(json!({"features": common::LOW_RISK})).to_request(),
    )
    .await;

    assert_eq!(
        body,
        json!({"prediction": 0, "label": "Non-Default", "default_probability": 0.2})
    );
}

#[actix_web::test]
async fn test_predict_high_risk_applicant() {
    let app = init_app!(common::fixture_state());
    let body: Value = test::call_and_read_body_json(
        &app,
        predict_request(json!({"features": common::high_risk()})).to_request(),
    )
    .await;

    assert_eq!(body["prediction"], 1);
    assert_eq!(body["label"], "Default");
    assert_eq!(body["default_probability"], 0.85);
}

#[actix_web::test]
async fn test_predict_accepts_integer_values() {
    let app = init_app!(common::fixture_state());
    let body: Value = test::call_and_read_body_json(
        &app,
        predict_request(json!({
            "features": [35, 50000, 10000, 650, 24, 3, 5.5, 36, 0.3, 1, 0, 1, 0, 1, 2, 0]
        }))
        .to_request(),
    )
    .await;

    let prediction = body["prediction"].as_u64().unwrap();
    assert!(prediction == 0 || prediction == 1);
    let expected_label = if prediction == 1 {
        "Default"
    } else {
        "Non-Default"
    };
    assert_eq!(body["label"], expected_label);
    let p = body["default_probability"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&p));
    assert_eq!((p * 10_000.0).round_ties_even() / 10_000.0, p);
}

#[actix_web::test]
async fn test_wrong_feature_count_returns_order() {
    let state = common::fixture_state();
    let metrics = state.metrics.clone();
    let app = init_app!(state);

    for len in [0usize, 1, 3, 15, 17] {
        let resp = test::call_service(
            &app,
            predict_request(json!({"features": vec![1.0; len]})).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "error": "Expected 16 features in this order",
                "order": FEATURE_NAMES
            }),
            "length {}",
            len
        );
    }

    // The model is never consulted for rejected shapes
    assert_eq!(metrics.inference_latency_seconds.get_sample_count(), 0);
    assert_eq!(metrics.rejected_count(RejectReason::FeatureCount), 5);
    assert_eq!(metrics.predictions_count(LoanLabel::Default), 0);
    assert_eq!(metrics.predictions_count(LoanLabel::NonDefault), 0);
}

#[actix_web::test]
async fn test_predict_is_idempotent() {
    let app = init_app!(common::fixture_state());
    let first: Value = test::call_and_read_body_json(
        &app,
        predict_request(json!({"features": common::high_risk()})).to_request(),
    )
    .await;
    let second: Value = test::call_and_read_body_json(
        &app,
        predict_request(json!({"features": common::high_risk()})).to_request(),
    )
    .await;
    assert_eq!(first, second);
}

#[actix_web::test]
async fn test_liveness_unaffected_by_predictions() {
    let app = init_app!(common::fixture_state());

    let _: Value = test::call_and_read_body_json(
        &app,
        predict_request(json!({"features": common::LOW_RISK})).to_request(),
    )
    .await;
    let _: Value = test::call_and_read_body_json(
        &app,
        predict_request(json!({"features": [1, 2, 3]})).to_request(),
    )
    .await;

    let root: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    let health: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    assert_eq!(root["message"], "Loan Default Prediction API is running");
    assert_eq!(health, json!({"status": "ok", "message": "Backend is awake"}));
}

#[actix_web::test]
async fn test_value_beyond_f32_range_is_server_error() {
    let state = common::fixture_state();
    let metrics = state.metrics.clone();
    let app = init_app!(state);

    let mut features = common::LOW_RISK.to_vec();
    features[common::CREDIT_SCORE] = 1e300;
    let resp = test::call_service(
        &app,
        predict_request(json!({"features": features})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["detail"],
        "Scaled feature at position 3 exceeds f32 range"
    );
    assert_eq!(metrics.rejected_count(RejectReason::Inference), 1);
    assert_eq!(metrics.predictions_count(LoanLabel::Default), 0);
}

#[actix_web::test]
async fn test_non_numeric_features_are_unprocessable() {
    let state = common::fixture_state();
    let metrics = state.metrics.clone();
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        predict_request(json!({"features": ["thirty-five", 50000]})).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
    assert_eq!(metrics.rejected_count(RejectReason::MalformedBody), 1);
}

#[actix_web::test]
async fn test_missing_features_field_is_unprocessable() {
    let app = init_app!(common::fixture_state());
    let req = predict_request(json!({"values": [1, 2, 3]})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_invalid_json_is_unprocessable() {
    let app = init_app!(common::fixture_state());
    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"features\": [1, 2,")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_cors_echoes_any_origin_with_credentials() {
    let app = init_app!(common::fixture_state());
    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://loan-frontend.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://loan-frontend.example"
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[actix_web::test]
async fn test_cors_preflight_for_predict() {
    let app = init_app!(common::fixture_state());
    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/predict")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}
