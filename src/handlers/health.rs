use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::schemas::{AppState, HealthResponse, MessageResponse};

pub const API_ROOT_MESSAGE: &str = "Personal Finance Tracker API";

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up; `database` reports connectivity", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_status = match state.db.ping().await {
        Ok(_) => "connected".to_string(),
        Err(_) => "disconnected".to_string(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    })
}

/// API root
#[utoipa::path(
    get,
    path = "/api/",
    tag = "health",
    responses(
        (status = 200, description = "API banner", body = MessageResponse)
    )
)]
#[instrument]
pub async fn api_root() -> Json<MessageResponse> {
    Json(MessageResponse::new(API_ROOT_MESSAGE))
}
