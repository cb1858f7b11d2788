//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use cover_auth::extract_bearer_token;
use cover_core::User;
use cover_db::UserRepository;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The user named by a valid `Authorization: Bearer <jwt>` header.
///
/// The token must verify and its subject must still exist in the database.
/// Any failure rejects the request with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = extract_bearer_token(header)?;
            let claims = state.jwt.validate(token)?;
            let user_id = claims.user_id()?;

            let user = UserRepository::new(state.pool.clone())
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| {
                    log::warn!("Token presented for unknown user {}", user_id);
                    ApiError::unauthorized("User no longer exists")
                })?;

            log::debug!("Authenticated request for user {}", user.id);

            Ok(AuthenticatedUser(user))
        }
    }
}
