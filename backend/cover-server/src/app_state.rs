use crate::PreviewStore;

use cover_auth::JwtService;
use cover_config::ValidationConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt: Arc<JwtService>,
    pub previews: PreviewStore,
    pub validation: ValidationConfig,
    /// Limit on a decoded preview image
    pub max_preview_bytes: usize,
}
