//! The library handle: state reads, bucket creation and guarded moves.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};

use super::names::{validate_bucket_name, validate_image_name};
use super::{relocate, scan};
use super::{BucketStats, LibraryState, Limits, MoveOutcome};
use crate::{BucketError, Result};

/// A root folder of loose images and numbered bucket subfolders.
///
/// Layout:
/// ```text
/// {root}/
/// ├── a.jpg          loose image
/// ├── b.png          loose image
/// ├── 1/             bucket
/// │   └── c.jpg
/// └── 2/             bucket
/// ```
#[derive(Debug, Clone)]
pub struct Library {
    /// Root folder.
    root: PathBuf,
    /// Per-bucket caps.
    limits: Limits,
}

impl Library {
    /// Create a library over `root`. The folder is not touched until an operation runs.
    pub fn new(root: impl Into<PathBuf>, limits: Limits) -> Self {
        Self {
            root: root.into(),
            limits,
        }
    }

    /// Get the root folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the per-bucket caps.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Fail with `RootUnavailable` unless the root is an existing directory.
    async fn ensure_root(&self) -> Result<()> {
        match fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(BucketError::RootUnavailable(format!(
                "{} is not a directory",
                self.root.display()
            ))),
            Err(e) => Err(BucketError::RootUnavailable(format!(
                "{}: {e}",
                self.root.display()
            ))),
        }
    }

    /// Read loose images and bucket stats fresh from disk.
    pub async fn read_state(&self) -> Result<LibraryState> {
        self.ensure_root().await?;

        let images = scan::list_images(&self.root).await?;

        let mut buckets = Vec::new();
        for dir in scan::list_buckets(&self.root).await? {
            buckets.push(scan::bucket_stats(&dir.path, &dir.name).await?);
        }

        Ok(LibraryState { images, buckets })
    }

    /// Create the next bucket, numbered one above the current maximum (or 1).
    ///
    /// Gaps left by deleted buckets are never reused.
    pub async fn create_bucket(&self) -> Result<BucketStats> {
        self.ensure_root().await?;

        let next = scan::list_buckets(&self.root)
            .await?
            .last()
            .map(|dir| dir.number.saturating_add(1))
            .unwrap_or(1);
        let name = next.to_string();

        match fs::create_dir(self.root.join(&name)).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(BucketError::BucketExists(name));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(bucket = %name, "Created bucket");
        Ok(BucketStats::empty(name))
    }

    /// Move a loose image into a bucket.
    ///
    /// Checks run in order: names, bucket exists, image exists, destination is
    /// free, capacity. Stats are recomputed from disk for the capacity check,
    /// and again after the move for the outcome.
    pub async fn move_image(&self, image_name: &str, bucket_name: &str) -> Result<MoveOutcome> {
        validate_image_name(image_name)?;
        validate_bucket_name(bucket_name)?;
        self.ensure_root().await?;

        let bucket_dir = self.root.join(bucket_name);
        if !is_dir(&bucket_dir).await? {
            return Err(BucketError::BucketNotFound(bucket_name.to_string()));
        }

        let source = self.root.join(image_name);
        let size = match fs::metadata(&source).await {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => return Err(BucketError::ImageNotFound(image_name.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BucketError::ImageNotFound(image_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let destination = bucket_dir.join(image_name);
        match fs::symlink_metadata(&destination).await {
            Ok(_) => {
                return Err(BucketError::DestinationExists {
                    bucket: bucket_name.to_string(),
                    image: image_name.to_string(),
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let current = scan::bucket_stats(&bucket_dir, bucket_name).await?;
        self.limits.admit(&current, size)?;

        relocate::move_file(&source, &destination).await?;

        let bucket = scan::bucket_stats(&bucket_dir, bucket_name).await?;
        tracing::info!(
            image = image_name,
            bucket = bucket_name,
            photos = bucket.photo_count,
            bytes = bucket.total_bytes,
            "Moved image"
        );

        Ok(MoveOutcome {
            image: image_name.to_string(),
            bucket,
        })
    }

    /// Open a loose image for streaming, returning the file and its length.
    ///
    /// Only root-level files with an image extension are reachable.
    pub async fn open_image(&self, name: &str) -> Result<(File, u64)> {
        validate_image_name(name)?;
        self.ensure_root().await?;

        let file = match File::open(self.root.join(name)).await {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BucketError::ImageNotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let meta = file.metadata().await?;
        if !meta.is_file() {
            return Err(BucketError::ImageNotFound(name.to_string()));
        }
        Ok((file, meta.len()))
    }
}

async fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
