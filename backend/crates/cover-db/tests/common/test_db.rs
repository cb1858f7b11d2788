use cover_core::{User, UserRole};
use cover_db::{UserRepository, connect_in_memory};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user so projects have an owner to reference
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> User {
    let user = User::new(
        email,
        "Test User".to_string(),
        UserRole::User,
        "not-a-real-hash".to_string(),
    );

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}
