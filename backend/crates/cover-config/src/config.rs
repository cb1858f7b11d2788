use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig, UploadsConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub uploads: UploadsConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for COVER_CONFIG_DIR env var, else use ./.cover/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply COVER_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: COVER_CONFIG_DIR env var > ./.cover/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.uploads.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the uploads root.
    pub fn uploads_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.uploads.dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (body limit {} bytes)",
            self.server.host, self.server.port, self.server.max_body_bytes
        );
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256, token ttl {}s, seed admin: {}",
            self.auth.token_ttl_secs,
            self.auth.admin_email.as_deref().unwrap_or("none")
        );
        info!(
            "  uploads: {} (preview limit {} bytes)",
            self.uploads.dir, self.uploads.max_preview_bytes
        );
        info!(
            "  validation: name={} chars, canvas={} bytes",
            self.validation.max_project_name_length, self.validation.max_canvas_json_bytes
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("COVER_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("COVER_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "COVER_SERVER_MAX_BODY_BYTES",
            &mut self.server.max_body_bytes,
        );

        // Database
        Self::apply_env_string("COVER_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("COVER_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("COVER_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_option_string("COVER_AUTH_ADMIN_EMAIL", &mut self.auth.admin_email);
        Self::apply_env_option_string("COVER_AUTH_ADMIN_PASSWORD", &mut self.auth.admin_password);
        Self::apply_env_string("COVER_AUTH_ADMIN_NAME", &mut self.auth.admin_name);

        // Uploads
        Self::apply_env_string("COVER_UPLOADS_DIR", &mut self.uploads.dir);
        Self::apply_env_parse(
            "COVER_UPLOADS_MAX_PREVIEW_BYTES",
            &mut self.uploads.max_preview_bytes,
        );

        // Validation
        Self::apply_env_parse(
            "COVER_VALIDATION_MAX_PROJECT_NAME_LENGTH",
            &mut self.validation.max_project_name_length,
        );
        Self::apply_env_parse(
            "COVER_VALIDATION_MAX_CANVAS_JSON_BYTES",
            &mut self.validation.max_canvas_json_bytes,
        );

        // Logging
        Self::apply_env_parse("COVER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("COVER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("COVER_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
