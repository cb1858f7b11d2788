//! Login and session handlers

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, LoginRequest, LoginResponse, MeResponse,
};

use cover_auth::verify_password;
use cover_db::UserRepository;

use axum::{Json, extract::State};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /api/auth/login
///
/// Exchange email and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized(INVALID_CREDENTIALS))?;

    // bcrypt is CPU-bound, run it off the async workers
    let password_hash = user.password_hash.clone();
    let matches =
        tokio::task::spawn_blocking(move || verify_password(&req.password, &password_hash))
            .await
            .map_err(|e| ApiError::internal(format!("Password check failed: {}", e)))?;

    if !matches {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let issued = state.jwt.issue(&user)?;
    log::info!("User {} logged in", user.email);

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: user.into(),
    }))
}

/// GET /api/auth/me
///
/// The account behind the presented token
pub async fn me(AuthenticatedUser(user): AuthenticatedUser) -> ApiResult<Json<MeResponse>> {
    Ok(Json(MeResponse { user: user.into() }))
}
