//! Health check handler
//!
//! Author: hephaex@gmail.com

use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the process is up
    #[schema(example = "healthy")]
    pub status: String,
}

/// Liveness probe
///
/// Reports only that the process is running; downstream dependencies
/// (database, completion API) are not probed.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
