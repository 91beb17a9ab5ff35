//! Test helpers for web API integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use bucketsort::config::WebConfig;
use bucketsort::web::handlers::AppState;
use bucketsort::web::router::create_router;
use bucketsort::Limits;
use tempfile::TempDir;

/// Caps used by most tests.
pub const TEST_LIMITS: Limits = Limits {
    max_bucket_photos: 2,
    max_bucket_bytes: 5000,
};

/// Create a test server over a fresh temporary root folder.
pub fn create_test_server(limits: Limits) -> (TestServer, TempDir) {
    let root = TempDir::new().expect("Failed to create temp root");
    let app_state = Arc::new(AppState::new(Some(root.path().to_path_buf()), limits));
    let router = create_router(app_state, &WebConfig::default());
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, root)
}

/// Create a test server with no root folder configured.
pub fn create_unconfigured_server() -> TestServer {
    let app_state = Arc::new(AppState::new(None, TEST_LIMITS));
    let router = create_router(app_state, &WebConfig::default());
    TestServer::new(router).expect("Failed to create test server")
}

/// Write a file of `len` bytes.
pub fn write_file(dir: &Path, name: &str, len: usize) {
    std::fs::write(dir.join(name), vec![0x42u8; len]).expect("Failed to write file");
}

/// Create a bucket folder directly on disk.
pub fn create_bucket_dir(root: &Path, name: &str) {
    std::fs::create_dir(root.join(name)).expect("Failed to create bucket folder");
}
