//! API error handling for the bucketsort web API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::BucketError;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed request body or query (400).
    BadRequest,
    /// Root folder not configured (400).
    RootNotConfigured,
    /// Root folder missing or not a directory (500).
    RootUnavailable,
    /// Unsafe or unsupported image name (400).
    InvalidImageName,
    /// Bucket name is not all digits (400).
    InvalidBucketName,
    /// Bucket folder does not exist (404).
    BucketNotFound,
    /// Image is not in the root folder (404).
    ImageNotFound,
    /// Same-named file already in the bucket (409).
    DestinationExists,
    /// Bucket would exceed its photo cap (409).
    BucketPhotoLimit,
    /// Bucket would exceed its byte cap (409).
    BucketByteLimit,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest
            | ErrorCode::RootNotConfigured
            | ErrorCode::InvalidImageName
            | ErrorCode::InvalidBucketName => StatusCode::BAD_REQUEST,
            ErrorCode::BucketNotFound | ErrorCode::ImageNotFound => StatusCode::NOT_FOUND,
            ErrorCode::DestinationExists
            | ErrorCode::BucketPhotoLimit
            | ErrorCode::BucketByteLimit => StatusCode::CONFLICT,
            ErrorCode::RootUnavailable | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<BucketError> for ApiError {
    fn from(err: BucketError) -> Self {
        let code = match &err {
            BucketError::RootNotConfigured => ErrorCode::RootNotConfigured,
            BucketError::RootUnavailable(_) => ErrorCode::RootUnavailable,
            BucketError::InvalidImageName(_) => ErrorCode::InvalidImageName,
            BucketError::InvalidBucketName(_) => ErrorCode::InvalidBucketName,
            BucketError::BucketNotFound(_) => ErrorCode::BucketNotFound,
            BucketError::ImageNotFound(_) => ErrorCode::ImageNotFound,
            BucketError::DestinationExists { .. } => ErrorCode::DestinationExists,
            BucketError::PhotoLimitExceeded { .. } => ErrorCode::BucketPhotoLimit,
            BucketError::ByteLimitExceeded { .. } => ErrorCode::BucketByteLimit,
            BucketError::BucketExists(_) | BucketError::Config(_) | BucketError::Io(_) => {
                ErrorCode::InternalError
            }
        };

        match code.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("Request failed: {}", err),
            StatusCode::CONFLICT => tracing::warn!("Request refused: {}", err),
            _ => tracing::debug!("Request rejected: {}", err),
        }

        ApiError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status() {
        assert_eq!(ErrorCode::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::RootNotConfigured.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::RootUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorCode::BucketNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ImageNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::DestinationExists.status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(ErrorCode::BucketPhotoLimit.status_code(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::BucketByteLimit.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_from_bucket_error() {
        let err = ApiError::from(BucketError::InvalidBucketName("x".to_string()));
        assert_eq!(err.code(), ErrorCode::InvalidBucketName);

        let err = ApiError::from(BucketError::ByteLimitExceeded {
            bucket: "1".to_string(),
            would_be: 10,
            limit: 5,
        });
        assert_eq!(err.code(), ErrorCode::BucketByteLimit);
        assert!(err.message().contains("limit 5"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let err = ApiError::from(BucketError::Io(io));
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(err.message().contains("read-only volume"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::BucketPhotoLimit).unwrap();
        assert_eq!(json, "\"BUCKET_PHOTO_LIMIT\"");
    }
}
