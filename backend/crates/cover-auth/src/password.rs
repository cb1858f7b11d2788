use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a plain-text password with bcrypt
#[track_caller]
pub fn hash_password(password: &str, cost: u32) -> AuthErrorResult<String> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::PasswordHash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Verify a plain-text password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}
