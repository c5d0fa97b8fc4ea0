//! Integration tests for the HTTP surface
//!
//! Drives the router directly with `tower::ServiceExt::oneshot`, no
//! listening socket needed.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use uncontract_core::Expander;
use uncontract_server::{create_router, AppState, ErrorResponse, ExpandResponse};

fn test_app() -> Router {
    let expander = Arc::new(Expander::new().expect("expander construction should not fail"));
    create_router(AppState { expander })
}

async fn post_expand(body: &str) -> (StatusCode, Vec<u8>) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/expand-contractions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_expand_success() {
    let (status, body) = post_expand(r#"{"sentence": "He's always worked hard"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let response: ExpandResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.original_sentence, "He's always worked hard");
    assert_eq!(response.expanded_sentence, "He has always worked hard");
}

#[tokio::test]
async fn test_expand_preserves_capitalization() {
    let (status, body) = post_expand(r#"{"sentence": "Don't stop"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let response: ExpandResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.expanded_sentence, "Do not stop");
}

#[tokio::test]
async fn test_empty_sentence_is_a_client_error() {
    let (status, body) = post_expand(r#"{"sentence": ""}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.error, "No sentence provided.");
}

#[tokio::test]
async fn test_missing_sentence_is_a_client_error() {
    let (status, body) = post_expand(r#"{}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.error, "No sentence provided.");
}

#[tokio::test]
async fn test_sentence_without_contractions_round_trips() {
    let (status, body) = post_expand(r#"{"sentence": "plain words only"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let response: ExpandResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.expanded_sentence, "plain words only");
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
