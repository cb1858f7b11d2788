use crate::error::Result as ServerErrorResult;

use cover_auth::hash_password;
use cover_core::{User, UserRole};
use cover_db::UserRepository;

use log::info;
use sqlx::SqlitePool;

/// Create the configured admin account unless a user with that email
/// already exists. An existing account is never modified.
pub async fn ensure_admin_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    name: &str,
    hash_cost: u32,
) -> ServerErrorResult<bool> {
    let repo = UserRepository::new(pool.clone());

    if repo.find_by_email(email).await?.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(password, hash_cost)?;
    let admin = User::new(email, name.to_string(), UserRole::Admin, password_hash);
    let created = repo.create_if_missing(&admin).await?;

    if created {
        info!("Created admin user: {}", admin.email);
    }

    Ok(created)
}
