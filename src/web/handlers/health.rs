//! Health check handler.

use axum::Json;

use crate::web::dto::HealthResponse;

/// GET /api/health - Liveness check.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
