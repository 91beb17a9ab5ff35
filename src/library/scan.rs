//! Directory scans behind the library state.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;

use super::names::{bucket_number, is_image_name};
use super::{BucketStats, ImageEntry};
use crate::Result;

/// A bucket folder found in the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BucketDir {
    pub number: u64,
    pub name: String,
    pub path: PathBuf,
}

/// Metadata of `path`, or `None` if it vanished since it was listed.
async fn metadata_if_present(path: &Path) -> Result<Option<std::fs::Metadata>> {
    match fs::metadata(path).await {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List bucket folders in `root`, sorted by numeric value.
///
/// Equal values written differently ("7", "07") are ordered by name.
pub(crate) async fn list_buckets(root: &Path) -> Result<Vec<BucketDir>> {
    let mut buckets = Vec::new();
    let mut entries = fs::read_dir(root).await?;

    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let Some(number) = bucket_number(&name) else {
            continue;
        };
        let path = entry.path();
        match metadata_if_present(&path).await? {
            Some(meta) if meta.is_dir() => buckets.push(BucketDir { number, name, path }),
            _ => {}
        }
    }

    buckets.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.name.cmp(&b.name)));
    Ok(buckets)
}

/// Count photos and bytes in one bucket folder. Subfolders are not entered.
pub(crate) async fn bucket_stats(dir: &Path, name: &str) -> Result<BucketStats> {
    let mut stats = BucketStats::empty(name);
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let Some(meta) = metadata_if_present(&entry.path()).await? else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }

        stats.total_bytes += meta.len();
        if is_image_name(&entry.file_name().to_string_lossy()) {
            stats.photo_count += 1;
        }
    }

    tracing::debug!(
        bucket = name,
        photos = stats.photo_count,
        bytes = stats.total_bytes,
        "Scanned bucket"
    );
    Ok(stats)
}

/// List loose images directly in `root`, sorted by name.
pub(crate) async fn list_images(root: &Path) -> Result<Vec<ImageEntry>> {
    let mut images = Vec::new();
    let mut entries = fs::read_dir(root).await?;

    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_image_name(&name) {
            continue;
        }
        let Some(meta) = metadata_if_present(&entry.path()).await? else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }

        let modified = meta
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_default();
        images.push(ImageEntry {
            name,
            size_bytes: meta.len(),
            modified,
        });
    }

    images.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(images)
}
