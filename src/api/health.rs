use axum::response::{IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Response from the /health endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy"
    pub status: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn handle_health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
