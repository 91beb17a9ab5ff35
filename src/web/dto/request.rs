//! Request DTOs for Web API.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Move request.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Name of a loose image in the root folder.
    pub image_name: String,
    /// Destination bucket name.
    pub bucket_name: String,
}

/// Query for fetching a single image.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageQuery {
    /// Image file name.
    pub name: String,
}
