use crate::ApiError;

use cover_auth::AuthError;
use cover_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Project x not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project x not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Name too long".into(),
        field: Some("project_name".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "project_name");
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_challenge() {
    let response = ApiError::unauthorized("nope").into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(http::header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Database operation failed")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core = CoreError::Validation {
        field: "canvas_json",
        message: "too large".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = core.into();

    match api {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("canvas_json")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_invalid_preview_maps_to_preview_image_field() {
    let core = CoreError::InvalidPreviewImage {
        message: "base64 decode failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = core.into();

    match api {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("preview_image"))
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_client_auth_errors_map_to_unauthorized() {
    let auth = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = auth.into();

    assert_eq!(api.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_sqlx_error_does_not_leak_details() {
    let api: ApiError = sqlx::Error::PoolTimedOut.into();

    match api {
        ApiError::Internal { message, .. } => assert_eq!(message, "Database operation failed"),
        other => panic!("Expected Internal, got {:?}", other),
    }
}
