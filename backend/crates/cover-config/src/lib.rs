mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod uploads_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use uploads_config::UploadsConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "COVER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".cover";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;
const MIN_MAX_BODY_BYTES: usize = 64 * 1024;
const MAX_MAX_BODY_BYTES: usize = 256 * 1024 * 1024;

const DEFAULT_DATABASE_FILENAME: &str = "cover.db";

const MIN_JWT_SECRET_BYTES: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;
const MIN_ADMIN_PASSWORD_LENGTH: usize = 6;
const DEFAULT_ADMIN_NAME: &str = "Administrator";

const DEFAULT_UPLOADS_DIRECTORY: &str = "uploads";
const DEFAULT_MAX_PREVIEW_BYTES: usize = 5 * 1024 * 1024;
const MIN_MAX_PREVIEW_BYTES: usize = 1024;
const MAX_MAX_PREVIEW_BYTES: usize = 50 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
