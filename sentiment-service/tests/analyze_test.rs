//! Endpoint contract tests for `POST /analyze` and `POST /predict`.
//!
//! These drive the router in-process; no listener is bound.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{body_json, post_json, router_with};
use sentiment_service::services::scorer::mock::{FailingScorer, FixedScorer};
use sentiment_service::services::VaderScorer;
use std::sync::Arc;
use tower::util::ServiceExt;

async fn analyze(text_body: &str) -> (StatusCode, serde_json::Value) {
    let app = router_with(Arc::new(VaderScorer::new()));
    let response = app.oneshot(post_json("/analyze", text_body)).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn positive_text_is_labelled_positive() {
    let (status, body) = analyze(r#"{"text":"This is an amazing project!"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "positive");
    assert!(body["score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn negative_text_is_labelled_negative() {
    let (status, body) = analyze(r#"{"text":"This is terrible and I hate it."}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "negative");
    assert!(body["score"].as_f64().unwrap() < 0.0);
}

#[tokio::test]
async fn factual_text_is_labelled_neutral() {
    let (status, body) = analyze(r#"{"text":"The sky is blue."}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "neutral");
    assert!(body["score"].as_f64().unwrap().abs() < 1e-9);
}

#[tokio::test]
async fn response_has_exactly_sentiment_and_score() {
    let (_, body) = analyze(r#"{"text":"Nothing much to say"}"#).await;

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(["positive", "negative", "neutral"].contains(&body["sentiment"].as_str().unwrap()));
    assert!(body["score"].is_number());
}

#[tokio::test]
async fn identical_input_yields_identical_output() {
    let body = r#"{"text":"Not bad, but the docs are confusing."}"#;
    let (_, first) = analyze(body).await;
    let (_, second) = analyze(body).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn score_is_passed_through_unrounded() {
    let app = router_with(Arc::new(FixedScorer::new(0.123456789)));
    let response = app
        .oneshot(post_json("/analyze", r#"{"text":"anything"}"#))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["score"].as_f64().unwrap(), 0.123456789);
    assert_eq!(body["sentiment"], "positive");
}

#[tokio::test]
async fn zero_polarity_is_neutral() {
    let app = router_with(Arc::new(FixedScorer::new(0.0)));
    let response = app
        .oneshot(post_json("/analyze", r#"{"text":"anything"}"#))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["sentiment"], "neutral");
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn empty_missing_and_blank_text_return_400_without_scoring() {
    let scorer = Arc::new(FixedScorer::new(0.5));

    for body in [r#"{"text":""}"#, r#"{}"#, r#"{"text":"   "}"#] {
        let app = router_with(scorer.clone());
        let response = app.oneshot(post_json("/analyze", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
        let json = body_json(response).await;
        assert_eq!(json["error"], "text: Text cannot be empty");
    }

    assert_eq!(scorer.calls(), 0);
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let (status, body) = analyze(r#"{"text": "unterminated"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn wrong_field_type_returns_400() {
    let (status, body) = analyze(r#"{"text": 42}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_returns_400() {
    let app = router_with(Arc::new(VaderScorer::new()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .body(Body::from(r#"{"text":"good"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_text_returns_400() {
    let text = "good ".repeat(2_001);
    let body = serde_json::json!({ "text": text }).to_string();
    let (status, json) = analyze(&body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "text: Text exceeds the maximum length");
}

// ============================================================================
// Scorer failures
// ============================================================================

#[tokio::test]
async fn scorer_failure_returns_500() {
    let app = router_with(Arc::new(FailingScorer));
    let response = app
        .oneshot(post_json("/analyze", r#"{"text":"hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn non_finite_polarity_returns_500() {
    let app = router_with(Arc::new(FixedScorer::new(f64::NAN)));
    let response = app
        .oneshot(post_json("/analyze", r#"{"text":"hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Legacy /predict
// ============================================================================

#[tokio::test]
async fn predict_echoes_text_with_rounded_confidence() {
    let app = router_with(Arc::new(FixedScorer::new(-0.87654)));
    let response = app
        .oneshot(post_json("/predict", r#"{"text":"meh"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["text"], "meh");
    assert_eq!(body["sentiment"], "negative");
    assert_eq!(body["confidence"].as_f64().unwrap(), 0.8765);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn predict_rejects_empty_text() {
    let app = router_with(Arc::new(VaderScorer::new()));
    let response = app
        .oneshot(post_json("/predict", r#"{"text":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
