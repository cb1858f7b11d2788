use crate::{
    AppState, delete_project, get_project, health, list_projects, login, me, save_project,
    uploads::PUBLIC_PREFIX,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let uploads = ServeDir::new(state.previews.root());

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        // Projects
        .route("/api/projects", get(list_projects))
        .route("/api/projects/save", post(save_project))
        .route(
            "/api/projects/{id}",
            get(get_project).delete(delete_project),
        )
        // Stored previews, public
        .nest_service(PUBLIC_PREFIX, uploads)
        .with_state(state)
        // Previews arrive base64-encoded inside the JSON body
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
