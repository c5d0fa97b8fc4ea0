//! HTTP front end for the contraction expansion engine
//!
//! A thin, stateless wrapper: one POST route that accepts a sentence and
//! returns it with every recognized contraction expanded. The engine is
//! pure and `Sync`, so a single shared instance serves every request.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use uncontract_core::{ExpandError, Expander};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Engine instance built once at startup
    pub expander: Arc<Expander>,
}

/// Inbound payload for the expansion route
#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    /// The sentence to expand; a missing field is treated as empty
    #[serde(default)]
    pub sentence: String,
}

/// Successful expansion payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandResponse {
    /// The sentence as received
    pub original_sentence: String,
    /// The sentence with contractions expanded
    pub expanded_sentence: String,
}

/// Client-error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Health-check payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Build the application router with tracing and CORS middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/expand-contractions", post(expand_contractions))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn expand_contractions(
    State(state): State<AppState>,
    Json(request): Json<ExpandRequest>,
) -> Response {
    match state.expander.expand(&request.sentence) {
        Ok(expansion) => (
            StatusCode::OK,
            Json(ExpandResponse {
                original_sentence: expansion.original,
                expanded_sentence: expansion.expanded,
            }),
        )
            .into_response(),
        Err(err @ ExpandError::EmptyInput) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            warn!("expansion failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
