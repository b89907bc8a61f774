//! API Routes
//!
//! Configures the Axum router with all payload service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{create_payload_handler, get_payload_handler, health_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /payload` - Generate (or reuse) a payload
/// - `GET /payload/:id` - Retrieve a payload's output
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/payload", post(create_payload_handler))
        .route("/payload/:id", get(get_payload_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::Database;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    async fn create_test_app() -> (TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::connect(dir.path().join("test.db")).await.unwrap();
        let config = Config {
            transformer_delay: Duration::ZERO,
            ..Config::default()
        };
        (dir, create_router(AppState::with_database(db, &config)))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payload")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"list1":["a"],"list2":["b"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/payload/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (_dir, app) = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
