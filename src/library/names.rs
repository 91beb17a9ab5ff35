//! Name validation for images and buckets.
//!
//! Both names arrive from the client and are joined onto the root folder, so
//! they must never be able to address anything outside it.

use std::path::{Component, Path};

use super::IMAGE_EXTENSIONS;
use crate::{BucketError, Result};

/// Whether `name` ends in one of the recognized image extensions.
pub fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Validate an image name received from a client.
///
/// The name must be a single non-empty leaf with no separators, no `.`/`..`
/// segment, no NUL byte, and a recognized image extension.
pub fn validate_image_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| BucketError::InvalidImageName(format!("{name:?}: {reason}"));

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }

    // Backslash is rejected on every platform, not only where it separates paths.
    if name.contains(['/', '\\', '\0']) {
        return Err(invalid("name must not contain path separators"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(leaf)), None) if leaf == name => {}
        _ => return Err(invalid("name must be a plain file name")),
    }

    if !is_image_name(name) {
        return Err(invalid("unsupported image extension"));
    }

    Ok(())
}

/// Validate a bucket name received from a client and return its number.
///
/// Only ASCII digits are accepted, and the value must fit in a `u64`. Folders
/// failing either rule are never listed as buckets, so they cannot be moved into.
pub fn validate_bucket_name(name: &str) -> Result<u64> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BucketError::InvalidBucketName(format!(
            "{name:?}: bucket names are made of digits only"
        )));
    }
    name.parse().map_err(|_| {
        BucketError::InvalidBucketName(format!("{name:?}: bucket number is too large"))
    })
}

/// Numeric value of a bucket folder name, if it is one.
pub(crate) fn bucket_number(name: &str) -> Option<u64> {
    validate_bucket_name(name).ok()
}
