//! Web API Image Tests
//!
//! Integration tests for fetching image content.

mod common;

use axum::http::StatusCode;
use common::{create_bucket_dir, create_test_server, write_file, TEST_LIMITS};
use serde_json::Value;

#[tokio::test]
async fn test_get_image() {
    let (server, root) = create_test_server(TEST_LIMITS);
    std::fs::write(root.path().join("a.png"), b"\x89PNG fake").unwrap();

    let response = server.get("/api/image").add_query_param("name", "a.png").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(response.as_bytes().as_ref(), b"\x89PNG fake");
}

#[tokio::test]
async fn test_get_image_not_found() {
    let (server, _root) = create_test_server(TEST_LIMITS);

    let response = server.get("/api/image").add_query_param("name", "gone.jpg").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "IMAGE_NOT_FOUND");
}

#[tokio::test]
async fn test_get_image_rejects_traversal() {
    let (server, root) = create_test_server(TEST_LIMITS);
    create_bucket_dir(root.path(), "1");
    write_file(&root.path().join("1"), "a.jpg", 3);

    for name in ["1/a.jpg", "../a.jpg", "..", "1\\a.jpg"] {
        let response = server.get("/api/image").add_query_param("name", name).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["error"]["code"],
            "INVALID_IMAGE_NAME",
            "{name:?}"
        );
    }
}

#[tokio::test]
async fn test_get_image_missing_query() {
    let (server, _root) = create_test_server(TEST_LIMITS);

    let response = server.get("/api/image").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "BAD_REQUEST");
}
