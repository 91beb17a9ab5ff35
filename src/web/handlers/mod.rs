//! API handlers for the web client.

pub mod bucket;
pub mod health;
pub mod image;
pub mod state;

pub use bucket::*;
pub use health::*;
pub use image::*;
pub use state::*;

use std::path::PathBuf;

use tokio::sync::{Mutex, MutexGuard};

use crate::library::{Library, Limits};
use crate::web::error::ApiError;
use crate::BucketError;

/// Shared application state.
pub struct AppState {
    /// Image library, absent when no root folder is configured.
    library: Option<Library>,
    /// Serializes bucket-changing requests within this process.
    write_lock: Mutex<()>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(root: Option<PathBuf>, limits: Limits) -> Self {
        Self {
            library: root.map(|root| Library::new(root, limits)),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the library, or a `ROOT_NOT_CONFIGURED` error.
    pub fn library(&self) -> Result<&Library, ApiError> {
        self.library
            .as_ref()
            .ok_or_else(|| BucketError::RootNotConfigured.into())
    }

    /// Wait for exclusive access to bucket-changing operations.
    ///
    /// Holding the guard across check and move keeps two requests from
    /// admitting against the same bucket snapshot.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::error::ErrorCode;

    fn limits() -> Limits {
        Limits {
            max_bucket_photos: 3,
            max_bucket_bytes: 30,
        }
    }

    #[test]
    fn test_library_not_configured() {
        let state = AppState::new(None, limits());

        let err = state.library().unwrap_err();
        assert_eq!(err.code(), ErrorCode::RootNotConfigured);
    }

    #[test]
    fn test_library_configured() {
        let state = AppState::new(Some(PathBuf::from("/photos")), limits());

        let library = state.library().unwrap();
        assert_eq!(library.root(), PathBuf::from("/photos"));
        assert_eq!(library.limits(), limits());
    }
}
