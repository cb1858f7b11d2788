use cover_server::{AppState, PreviewStore, build_router, logger, seed};

use cover_auth::{DEFAULT_HASH_COST, JwtService};
use cover_config::{Config, ConfigError};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cover-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pool = cover_db::connect(&database_path).await?;
    info!("Database connection established");

    // Auth
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;
    let jwt = Arc::new(JwtService::with_hs256(
        secret.as_bytes(),
        config.auth.token_ttl_secs,
    ));
    info!("JWT: {} authentication enabled", jwt.algorithm());

    match config.auth.admin_credentials() {
        Some((email, password)) => {
            seed::ensure_admin_user(
                &pool,
                email,
                password,
                &config.auth.admin_name,
                DEFAULT_HASH_COST,
            )
            .await?;
        }
        None => warn!("No admin credentials configured; no account will be seeded"),
    }

    // Preview storage
    let previews = PreviewStore::new(config.uploads_path()?);
    previews.ensure_dirs().await?;
    info!("Preview storage: {}", previews.covers_dir().display());

    let app_state = AppState {
        pool: pool.clone(),
        jwt,
        previews,
        validation: config.validation.clone(),
        max_preview_bytes: config.uploads.max_preview_bytes,
    };

    let app = build_router(app_state, config.server.max_body_bytes);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
