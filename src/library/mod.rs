//! Image library module for bucketsort.
//!
//! The library is a plain folder tree:
//! - loose images sit directly in the root folder
//! - buckets are subfolders named with plain positive integers
//! - every operation re-reads the tree; nothing is cached between calls

mod names;
mod relocate;
mod scan;
mod store;
mod types;

pub use names::{is_image_name, validate_bucket_name, validate_image_name};
pub use store::Library;
pub use types::{BucketStats, ImageEntry, LibraryState, Limits, MoveOutcome};

/// File extensions recognized as images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];
