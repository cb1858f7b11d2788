#![allow(dead_code)]

//! Test infrastructure for cover-server API tests

use cover_auth::{JwtService, hash_password};
use cover_config::ValidationConfig;
use cover_core::{User, UserRole};
use cover_db::UserRepository;
use cover_server::{AppState, PreviewStore, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "admin123";
pub const TEST_BODY_LIMIT: usize = 2 * 1024 * 1024;
/// Minimum bcrypt cost, keeps tests fast
pub const TEST_HASH_COST: u32 = 4;

/// 1x1 red PNG
pub const RED_PIXEL_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

/// JPEG header only; enough for a declared-format data URL
pub const JPEG_HEADER: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub uploads: TempDir,
}

impl TestApp {
    pub fn cover_file(&self, file_name: &str) -> std::path::PathBuf {
        self.uploads.path().join("covers").join(file_name)
    }
}

/// Router over an in-memory database and a temporary uploads directory
pub async fn create_test_app() -> TestApp {
    let pool = cover_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let uploads = tempfile::tempdir().expect("Failed to create uploads dir");

    let state = AppState {
        pool,
        jwt: Arc::new(JwtService::with_hs256(TEST_SECRET, 3600)),
        previews: PreviewStore::new(uploads.path()),
        validation: ValidationConfig::default(),
        max_preview_bytes: 512 * 1024,
    };
    let router = build_router(state.clone(), TEST_BODY_LIMIT);

    TestApp {
        state,
        router,
        uploads,
    }
}

/// Create a user who can log in with `TEST_PASSWORD`
pub async fn create_test_user(state: &AppState, email: &str) -> User {
    let hash = hash_password(TEST_PASSWORD, TEST_HASH_COST).expect("Failed to hash password");
    let user = User::new(email, "Test User".to_string(), UserRole::User, hash);

    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}

/// Create a user and return a bearer token for them
pub async fn create_logged_in_user(app: &TestApp, email: &str) -> (User, String) {
    let user = create_test_user(&app.state, email).await;
    let token = app.state.jwt.issue(&user).expect("Failed to issue token").token;
    (user, token)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Send a request; non-JSON bodies come back as `Value::Null`
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Save a new project through the API and return its JSON
pub async fn save_new_project(app: &TestApp, token: &str, name: &str, canvas: &str) -> Value {
    let body = serde_json::json!({
        "project_name": name,
        "canvas_json": canvas,
    });
    let (status, json) = send(
        &app.router,
        json_request("POST", "/api/projects/save", Some(token), &body),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", json);
    json["project"].clone()
}
