use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cover_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] cover_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] cover_auth::AuthError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
