//! Router configuration for Web API.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{create_bucket, get_image, get_state, health, move_image, AppState};
use super::middleware::create_cors_layer;
use super::openapi::ApiDoc;
use crate::config::WebConfig;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, web_config: &WebConfig) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/state", get(get_state))
        .route("/buckets", post(create_bucket))
        .route("/image", get(get_image))
        .route("/move", post(move_image))
        .route("/openapi.json", get(openapi_json));

    let mut router = Router::new().nest("/api", api_routes);

    if web_config.serve_static {
        if let Some(static_router) = create_static_router(&web_config.static_path) {
            router = router.merge(static_router);
        }
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&web_config.cors_origins)),
        )
        .with_state(app_state)
}

/// Serve the built browser client, falling back to `index.html`.
///
/// Returns `None` when the directory does not exist.
pub fn create_static_router<S>(static_path: &str) -> Option<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let dir = Path::new(static_path);
    if !dir.is_dir() {
        tracing::warn!("Static directory not found: {}", static_path);
        return None;
    }

    let index = ServeFile::new(dir.join("index.html"));
    Some(Router::new().fallback_service(ServeDir::new(dir).fallback(index)))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let state = Arc::new(AppState::new(
            None,
            crate::library::Limits {
                max_bucket_photos: 1,
                max_bucket_bytes: 1,
            },
        ));
        create_router(state, &WebConfig::default())
    }

    #[tokio::test]
    async fn test_health_without_root() {
        let response = test_router()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_openapi_json() {
        let response = test_router()
            .oneshot(Request::get("/api/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_create_static_router_missing_dir() {
        assert!(create_static_router::<()>("does/not/exist").is_none());
    }

    #[tokio::test]
    async fn test_static_router_serves_index_fallback() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();

        let router = create_static_router::<()>(dir.path().to_str().unwrap()).unwrap();
        let response = router
            .oneshot(Request::get("/some/client/route").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>app</html>");
    }

    #[tokio::test]
    async fn test_static_client_gets_cors_headers() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();

        let web_config = WebConfig {
            serve_static: true,
            static_path: dir.path().to_str().unwrap().to_string(),
            ..WebConfig::default()
        };
        let state = Arc::new(AppState::new(
            None,
            crate::library::Limits {
                max_bucket_photos: 1,
                max_bucket_bytes: 1,
            },
        ));

        let response = create_router(state, &web_config)
            .oneshot(
                Request::get("/")
                    .header("Origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<html>app</html>");
    }
}
