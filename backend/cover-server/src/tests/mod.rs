mod api;
mod uploads;

use crate::{AppState, PreviewStore};

use cover_auth::JwtService;
use cover_config::ValidationConfig;
use cover_core::{User, UserRole};
use cover_db::UserRepository;

use std::path::Path;
use std::sync::Arc;

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-that-is-at-least-32-bytes";

pub(crate) async fn create_test_state(uploads_root: &Path) -> AppState {
    let pool = cover_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState {
        pool,
        jwt: Arc::new(JwtService::with_hs256(TEST_SECRET, 3600)),
        previews: PreviewStore::new(uploads_root),
        validation: ValidationConfig::default(),
        max_preview_bytes: 1024 * 1024,
    }
}

pub(crate) async fn insert_user(state: &AppState, email: &str) -> User {
    let user = User::new(
        email,
        "Unit Test".to_string(),
        UserRole::User,
        "unused".to_string(),
    );
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create user");
    user
}
