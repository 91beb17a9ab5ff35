//! Error types for bucketsort.

use thiserror::Error;

/// Common error type for bucketsort.
#[derive(Error, Debug)]
pub enum BucketError {
    /// No root folder was configured.
    #[error("root folder is not configured")]
    RootNotConfigured,

    /// The configured root folder is missing or is not a directory.
    #[error("root folder is unavailable: {0}")]
    RootUnavailable(String),

    /// Image name is not a safe leaf name with a recognized extension.
    #[error("invalid image name: {0}")]
    InvalidImageName(String),

    /// Bucket name is not made of ASCII digits only.
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    /// Destination bucket folder does not exist.
    #[error("bucket {0} not found")]
    BucketNotFound(String),

    /// Source image is not in the root folder.
    #[error("image {0} not found")]
    ImageNotFound(String),

    /// A file with the same name already sits in the destination bucket.
    #[error("{image} already exists in bucket {bucket}")]
    DestinationExists { bucket: String, image: String },

    /// Moving would push the bucket over its photo cap.
    #[error("bucket {bucket} would hold {would_be} photos (limit {limit})")]
    PhotoLimitExceeded {
        bucket: String,
        would_be: u64,
        limit: u64,
    },

    /// Moving would push the bucket over its byte cap.
    #[error("bucket {bucket} would hold {would_be} bytes (limit {limit})")]
    ByteLimitExceeded {
        bucket: String,
        would_be: u64,
        limit: u64,
    },

    /// A new bucket's folder already exists.
    #[error("bucket {0} already exists")]
    BucketExists(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bucketsort operations.
pub type Result<T> = std::result::Result<T, BucketError>;
