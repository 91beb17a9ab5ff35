//! Library state handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::StateResponse;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/state - Loose images, buckets and caps, read fresh from disk.
#[utoipa::path(
    get,
    path = "/api/state",
    tag = "library",
    responses(
        (status = 200, description = "Current library state", body = StateResponse),
        (status = 400, description = "Root folder not configured"),
        (status = 500, description = "Root folder unreadable or not a directory")
    )
)]
pub async fn get_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StateResponse>, ApiError> {
    let library = state.library()?;
    let snapshot = library.read_state().await?;

    Ok(Json(StateResponse::new(
        library.root().display().to_string(),
        library.limits(),
        snapshot,
    )))
}
