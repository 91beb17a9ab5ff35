//! Moving a file from the root into a bucket.

use std::io;
use std::path::Path;

use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// `EXDEV` on Linux, macOS and the BSDs.
#[cfg(not(windows))]
const EXDEV: i32 = 18;

/// `ERROR_NOT_SAME_DEVICE`.
#[cfg(windows)]
const EXDEV: i32 = 17;

fn is_cross_device(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices || err.raw_os_error() == Some(EXDEV)
}

/// Move `source` to `destination`.
///
/// Tries a rename first. When the two paths are on different devices the file
/// is copied and the source removed afterwards. On failure the source is
/// always left in place.
pub(crate) async fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    let renamed = fs::rename(source, destination).await;
    after_rename(renamed, source, destination).await
}

/// Finish a move given the outcome of the rename attempt.
async fn after_rename(
    renamed: io::Result<()>,
    source: &Path,
    destination: &Path,
) -> io::Result<()> {
    match renamed {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            tracing::debug!(
                source = %source.display(),
                destination = %destination.display(),
                "Rename crosses devices, falling back to copy"
            );
            copy_then_remove(source, destination).await
        }
        Err(e) => Err(e),
    }
}

/// Copy `source` to a new file at `destination`, then remove `source`.
///
/// The destination is created with `create_new`, so an existing file is never
/// overwritten. A partial or unverified copy is removed again.
pub(crate) async fn copy_then_remove(source: &Path, destination: &Path) -> io::Result<()> {
    let mut reader = File::open(source).await?;
    let source_meta = reader.metadata().await?;
    let expected = source_meta.len();

    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .await?;

    let copied: io::Result<()> = async {
        let written = tokio::io::copy(&mut reader, &mut writer).await?;
        writer.flush().await?;
        writer.sync_all().await?;

        if written != expected {
            return Err(io::Error::other(format!(
                "copied {written} of {expected} bytes"
            )));
        }
        let on_disk = fs::metadata(destination).await?.len();
        if on_disk != expected {
            return Err(io::Error::other(format!(
                "destination holds {on_disk} of {expected} bytes"
            )));
        }
        Ok(())
    }
    .await;
    drop(writer);
    drop(reader);

    if let Err(e) = copied {
        discard(destination).await;
        return Err(e);
    }

    if let Err(e) = fs::set_permissions(destination, source_meta.permissions()).await {
        tracing::debug!(error = %e, "Could not copy permissions to destination");
    }

    if let Err(e) = fs::remove_file(source).await {
        // Keep exactly one copy: the source stays, the new copy goes.
        discard(destination).await;
        return Err(e);
    }

    Ok(())
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial copy");
    }
}
