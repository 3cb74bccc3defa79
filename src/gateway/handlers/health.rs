//! Health check handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::ErrorResponse;

/// Health check response data
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Build git hash
    #[schema(example = "3f2a9c1")]
    pub version: String,
    #[schema(example = "postgres")]
    pub storage: String,
}

/// Health check endpoint
///
/// Pings PostgreSQL when configured. Failure details are logged, never
/// returned.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if let Some(ref db) = state.pg_db {
        if let Err(e) = db.health_check().await {
            tracing::error!("[HEALTH] PostgreSQL ping failed: {}", e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("unavailable")),
            )
                .into_response();
        }
    }

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: crate::VERSION.to_string(),
            storage: state.order_service.store_name().to_string(),
        }),
    )
        .into_response()
}
