use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_NAME, DEFAULT_TOKEN_TTL_SECS,
    MAX_TOKEN_TTL_SECS, MIN_ADMIN_PASSWORD_LENGTH, MIN_JWT_SECRET_BYTES, MIN_TOKEN_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret, required
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens
    pub token_ttl_secs: u64,
    /// Seed admin account, created at startup when both fields are set
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    pub admin_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            admin_email: None,
            admin_password: None,
            admin_name: String::from(DEFAULT_ADMIN_NAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set COVER_AUTH_JWT_SECRET)",
                ));
            }
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_BYTES => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes",
                    MIN_JWT_SECRET_BYTES
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_secs < MIN_TOKEN_TTL_SECS || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) => {
                if !email.contains('@') {
                    return Err(ConfigError::auth("auth.admin_email must be an email address"));
                }
                if password.len() < MIN_ADMIN_PASSWORD_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.admin_password must be at least {} characters",
                        MIN_ADMIN_PASSWORD_LENGTH
                    )));
                }
            }
            (None, None) => {}
            _ => {
                return Err(ConfigError::auth(
                    "auth.admin_email and auth.admin_password must be set together",
                ));
            }
        }

        Ok(())
    }

    /// Seed admin credentials, when configured
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }
}
