//! Image handlers.

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::Response,
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::web::dto::{ApiJson, ApiQuery, ImageQuery, MoveRequest, MoveResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/image?name= - Raw bytes of a loose image.
#[utoipa::path(
    get,
    path = "/api/image",
    tag = "images",
    params(ImageQuery),
    responses(
        (status = 200, description = "Image content", content_type = "application/octet-stream"),
        (status = 400, description = "Invalid or unsafe name"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn get_image(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ImageQuery>,
) -> Result<Response<Body>, ApiError> {
    let library = state.library()?;
    let (file, len) = library.open_image(&query.name).await?;

    let content_type = mime_guess::from_path(&query.name)
        .first_or_octet_stream()
        .to_string();

    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, len)
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(ReaderStream::new(file)))
        .map_err(|e| {
            tracing::error!("Failed to build response: {}", e);
            ApiError::internal("Failed to build response")
        })
}

/// POST /api/move - Move a loose image into a bucket.
///
/// The bucket's usage is recomputed from disk before the caps are checked.
#[utoipa::path(
    post,
    path = "/api/move",
    tag = "images",
    request_body = MoveRequest,
    responses(
        (status = 200, description = "Image moved", body = MoveResponse),
        (status = 400, description = "Invalid image or bucket name"),
        (status = 404, description = "Bucket or image not found"),
        (status = 409, description = "Destination exists or bucket is full"),
        (status = 500, description = "Filesystem failure")
    )
)]
pub async fn move_image(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let library = state.library()?;

    let _guard = state.lock_writes().await;
    let outcome = library.move_image(&req.image_name, &req.bucket_name).await?;

    Ok(Json(outcome.into()))
}
