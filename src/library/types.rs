//! Library value types.

use chrono::{DateTime, Utc};

use crate::{BucketError, Result};

/// Per-bucket caps, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of photos in one bucket.
    pub max_bucket_photos: u64,
    /// Maximum total bytes of all files in one bucket.
    pub max_bucket_bytes: u64,
}

impl Limits {
    /// Check that one more photo of `incoming_bytes` fits into `bucket`.
    ///
    /// The photo cap is checked before the byte cap.
    pub fn admit(&self, bucket: &BucketStats, incoming_bytes: u64) -> Result<()> {
        let photos = bucket.photo_count.saturating_add(1);
        if photos > self.max_bucket_photos {
            return Err(BucketError::PhotoLimitExceeded {
                bucket: bucket.name.clone(),
                would_be: photos,
                limit: self.max_bucket_photos,
            });
        }

        let bytes = bucket.total_bytes.saturating_add(incoming_bytes);
        if bytes > self.max_bucket_bytes {
            return Err(BucketError::ByteLimitExceeded {
                bucket: bucket.name.clone(),
                would_be: bytes,
                limit: self.max_bucket_bytes,
            });
        }

        Ok(())
    }
}

/// A loose image in the root folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name (leaf only).
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

/// Current contents of a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketStats {
    /// Bucket folder name.
    pub name: String,
    /// Number of files with an image extension.
    pub photo_count: u64,
    /// Total size of every file in the bucket, images or not.
    pub total_bytes: u64,
}

impl BucketStats {
    /// Stats of a bucket with nothing in it.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photo_count: 0,
            total_bytes: 0,
        }
    }
}

/// Snapshot of the whole library.
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    /// Root-level images, sorted by name.
    pub images: Vec<ImageEntry>,
    /// Buckets, sorted by numeric value.
    pub buckets: Vec<BucketStats>,
}

/// Result of a successful move.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    /// Name of the moved image.
    pub image: String,
    /// Destination bucket after the move.
    pub bucket: BucketStats,
}
