//! bucketsort - sort loose images into numbered bucket folders.
//!
//! The root folder holds loose images and numerically named bucket
//! subfolders. Images are moved into buckets on request, subject to a
//! per-bucket photo cap and byte cap.

pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod web;

pub use config::Config;
pub use error::{BucketError, Result};
pub use library::{BucketStats, ImageEntry, Library, LibraryState, Limits, MoveOutcome};
pub use web::WebServer;
