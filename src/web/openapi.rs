//! OpenAPI description of the web API.

use utoipa::OpenApi;

use super::dto::{
    BucketResponse, CreateBucketResponse, HealthResponse, ImageResponse, LimitsResponse,
    MoveRequest, MoveResponse, StateResponse,
};
use super::error::{ErrorBody, ErrorCode, ErrorDetail};
use super::handlers;

/// OpenAPI document for `/api`.
#[derive(OpenApi)]
#[openapi(
    info(title = "bucketsort", description = "Sort loose images into capped bucket folders"),
    paths(
        handlers::health::health,
        handlers::state::get_state,
        handlers::bucket::create_bucket,
        handlers::image::get_image,
        handlers::image::move_image,
    ),
    components(schemas(
        HealthResponse,
        LimitsResponse,
        ImageResponse,
        BucketResponse,
        StateResponse,
        CreateBucketResponse,
        MoveRequest,
        MoveResponse,
        ErrorBody,
        ErrorDetail,
        ErrorCode,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "library", description = "Library state and buckets"),
        (name = "images", description = "Image content and moves")
    )
)]
pub struct ApiDoc;
