use crate::AuthenticatedUser;
use crate::tests::{TEST_SECRET, create_test_state, insert_user};

use cover_auth::JwtService;
use cover_core::{User, UserRole};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use http::StatusCode;

fn request_with_auth(value: Option<&str>) -> http::request::Parts {
    let mut builder = Request::builder().uri("/api/projects");
    if let Some(value) = value {
        builder = builder.header("Authorization", value);
    }
    let (parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn test_extractor_with_valid_token_loads_user() {
    let dir = tempfile::tempdir().unwrap();
    let state = create_test_state(dir.path()).await;
    let user = insert_user(&state, "reader@example.com").await;
    let token = state.jwt.issue(&user).unwrap().token;

    let mut parts = request_with_auth(Some(&format!("Bearer {}", token)));
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    let AuthenticatedUser(found) = result.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, "reader@example.com");
}

#[tokio::test]
async fn test_extractor_without_header_rejects() {
    let dir = tempfile::tempdir().unwrap();
    let state = create_test_state(dir.path()).await;

    let mut parts = request_with_auth(None);
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_with_basic_scheme_rejects() {
    let dir = tempfile::tempdir().unwrap();
    let state = create_test_state(dir.path()).await;

    let mut parts = request_with_auth(Some("Basic YWRtaW46YWRtaW4="));
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_with_foreign_signature_rejects() {
    let dir = tempfile::tempdir().unwrap();
    let state = create_test_state(dir.path()).await;
    let user = insert_user(&state, "reader@example.com").await;

    let other = JwtService::with_hs256(b"a-completely-different-secret-of-32-bytes", 3600);
    let token = other.issue(&user).unwrap().token;

    let mut parts = request_with_auth(Some(&format!("Bearer {}", token)));
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_with_token_for_deleted_user_rejects() {
    let dir = tempfile::tempdir().unwrap();
    let state = create_test_state(dir.path()).await;

    // Signed correctly, but the user was never stored
    let ghost = User::new("ghost@example.com", "Ghost".into(), UserRole::User, "x".into());
    let token = JwtService::with_hs256(TEST_SECRET, 3600)
        .issue(&ghost)
        .unwrap()
        .token;

    let mut parts = request_with_auth(Some(&format!("Bearer {}", token)));
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}
