//! Bucket handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::web::dto::CreateBucketResponse;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/buckets - Create the next numbered bucket.
#[utoipa::path(
    post,
    path = "/api/buckets",
    tag = "library",
    responses(
        (status = 200, description = "Bucket created", body = CreateBucketResponse),
        (status = 400, description = "Root folder not configured"),
        (status = 500, description = "Bucket could not be created")
    )
)]
pub async fn create_bucket(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CreateBucketResponse>, ApiError> {
    let library = state.library()?;

    let _guard = state.lock_writes().await;
    let bucket = library.create_bucket().await?;

    Ok(Json(CreateBucketResponse {
        bucket: bucket.into(),
    }))
}
