#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use mandir_api::config::ServerConfig;
use mandir_api::router::build_app_router;
use mandir_api::seed;
use mandir_api::state::{AppState, ContentStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_sample_content: true,
        activity_log_capacity: 50,
    }
}

/// Shared state over the sample content, with the activity log running.
pub fn seeded_state() -> AppState {
    let state = AppState::new(test_config(), seed::sample_content().unwrap());
    state.spawn_activity_log();
    state
}

/// Shared state over empty collections, with the activity log running.
pub fn empty_state() -> AppState {
    let state = AppState::new(test_config(), ContentStore::empty());
    state.spawn_activity_log();
    state
}

/// Build the full application router with all middleware layers. Clone
/// the returned router to send several requests against the same state.
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Poll the activity log until it holds at least `count` events.
pub async fn wait_for_activity(state: &AppState, count: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while state.activity.len().await < count {
        assert!(
            tokio::time::Instant::now() < deadline,
            "activity log never reached {count} events"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
