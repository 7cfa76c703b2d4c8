//! Tests for `AppError` → HTTP response mapping, plus error bodies as seen
//! through the router.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{body_json, delete, get, post_json, put_json};
use http_body_util::BodyExt;
use mandir_api::error::AppError;
use mandir_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Direct mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::not_found("slider_image", 42);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "slider_image with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("title: must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "title: must not be empty");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate id 3".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn core_internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("secret stack trace".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("secret"));
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Through the router
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_record_is_404_for_every_method() {
    let app = common::build_test_app(common::seeded_state());

    let response = get(app.clone(), "/api/v1/events/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "event with id 999 not found");

    let response = put_json(app.clone(), "/api/v1/services/999", serde_json::json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app.clone(), "/api/v1/testimonials/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        app,
        "/api/v1/service-cards/999/move",
        serde_json::json!({"direction": "up"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_update_of_missing_record_is_404() {
    let app = common::build_test_app(common::seeded_state());

    let response = put_json(app, "/api/v1/slider/999", serde_json::json!({"alt_text": ""})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn blank_required_field_is_a_validation_error() {
    let app = common::build_test_app(common::empty_state());

    let response = post_json(
        app,
        "/api/v1/services",
        serde_json::json!({"name": "", "category": "regular", "description": "Evening aarti"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn unknown_enum_value_is_rejected_before_the_store() {
    let app = common::build_test_app(common::empty_state());

    let response = post_json(
        app,
        "/api/v1/events",
        serde_json::json!({
            "title": "Holi",
            "event_type": "carnival",
            "date": "2025-03-14",
            "location": "Temple lawn",
            "description": "Festival of colours",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
