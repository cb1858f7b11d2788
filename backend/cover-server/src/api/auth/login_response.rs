use crate::UserDto;

use serde::Serialize;

/// Successful login: a bearer token and the account it belongs to
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Unix timestamp after which the token is rejected
    pub expires_at: i64,
    pub user: UserDto,
}
