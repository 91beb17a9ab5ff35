//! Response DTOs for Web API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::library::{BucketStats, ImageEntry, LibraryState, Limits, MoveOutcome};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always true while the server is up.
    pub ok: bool,
}

/// Bucket caps.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LimitsResponse {
    /// Maximum photos per bucket.
    pub max_bucket_photos: u64,
    /// Maximum bytes per bucket.
    pub max_bucket_bytes: u64,
}

impl From<Limits> for LimitsResponse {
    fn from(limits: Limits) -> Self {
        Self {
            max_bucket_photos: limits.max_bucket_photos,
            max_bucket_bytes: limits.max_bucket_bytes,
        }
    }
}

/// A loose image.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Modification time in milliseconds since the Unix epoch.
    pub mtime_ms: i64,
}

impl From<ImageEntry> for ImageResponse {
    fn from(image: ImageEntry) -> Self {
        Self {
            name: image.name,
            size_bytes: image.size_bytes,
            mtime_ms: image.modified.timestamp_millis(),
        }
    }
}

/// A bucket and its current usage.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BucketResponse {
    /// Bucket name.
    pub name: String,
    /// Number of photos.
    pub photo_count: u64,
    /// Total bytes of all files.
    pub total_bytes: u64,
}

impl From<BucketStats> for BucketResponse {
    fn from(stats: BucketStats) -> Self {
        Self {
            name: stats.name,
            photo_count: stats.photo_count,
            total_bytes: stats.total_bytes,
        }
    }
}

/// Full library state (for /api/state).
#[derive(Debug, Serialize, ToSchema)]
pub struct StateResponse {
    /// Root folder path.
    pub root: String,
    /// Bucket caps.
    pub limits: LimitsResponse,
    /// Loose images, sorted by name.
    pub images: Vec<ImageResponse>,
    /// Buckets, sorted by number.
    pub buckets: Vec<BucketResponse>,
}

impl StateResponse {
    /// Build the response from a fresh library snapshot.
    pub fn new(root: String, limits: Limits, state: LibraryState) -> Self {
        Self {
            root,
            limits: limits.into(),
            images: state.images.into_iter().map(Into::into).collect(),
            buckets: state.buckets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Bucket creation response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateBucketResponse {
    /// The new, empty bucket.
    pub bucket: BucketResponse,
}

/// Move response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MoveResponse {
    /// Always true on success.
    pub ok: bool,
    /// Destination bucket after the move.
    pub bucket: BucketResponse,
    /// Name of the image that left the root folder.
    pub removed: String,
}

impl From<MoveOutcome> for MoveResponse {
    fn from(outcome: MoveOutcome) -> Self {
        Self {
            ok: true,
            bucket: outcome.bucket.into(),
            removed: outcome.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_state_response_shape() {
        let state = LibraryState {
            images: vec![ImageEntry {
                name: "a.jpg".to_string(),
                size_bytes: 1000,
                modified: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
            }],
            buckets: vec![BucketStats::empty("1")],
        };
        let limits = Limits {
            max_bucket_photos: 2,
            max_bucket_bytes: 5000,
        };

        let value = serde_json::to_value(StateResponse::new("/photos".to_string(), limits, state))
            .unwrap();

        assert_eq!(
            value,
            json!({
                "root": "/photos",
                "limits": {"maxBucketPhotos": 2, "maxBucketBytes": 5000},
                "images": [{"name": "a.jpg", "sizeBytes": 1000, "mtimeMs": 1_700_000_000_123i64}],
                "buckets": [{"name": "1", "photoCount": 0, "totalBytes": 0}]
            })
        );
    }

    #[test]
    fn test_move_response_shape() {
        let outcome = MoveOutcome {
            image: "a.jpg".to_string(),
            bucket: BucketStats {
                name: "1".to_string(),
                photo_count: 1,
                total_bytes: 1000,
            },
        };

        let value = serde_json::to_value(MoveResponse::from(outcome)).unwrap();

        assert_eq!(
            value,
            json!({
                "ok": true,
                "bucket": {"name": "1", "photoCount": 1, "totalBytes": 1000},
                "removed": "a.jpg"
            })
        );
    }
}
