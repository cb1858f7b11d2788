use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_PREVIEW_BYTES, DEFAULT_UPLOADS_DIRECTORY,
    MAX_MAX_PREVIEW_BYTES, MIN_MAX_PREVIEW_BYTES,
};

use serde::Deserialize;

/// Storage for preview images served under `/api/uploads`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Directory relative to the config directory
    pub dir: String,
    /// Limit on a decoded preview image
    pub max_preview_bytes: usize,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_UPLOADS_DIRECTORY),
            max_preview_bytes: DEFAULT_MAX_PREVIEW_BYTES,
        }
    }
}

impl UploadsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.dir);
        if self.dir.is_empty() || path.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::uploads(
                "uploads.dir must be relative, non-empty and cannot contain '..'",
            ));
        }

        if self.max_preview_bytes < MIN_MAX_PREVIEW_BYTES
            || self.max_preview_bytes > MAX_MAX_PREVIEW_BYTES
        {
            return Err(ConfigError::uploads(format!(
                "uploads.max_preview_bytes must be {}-{}, got {}",
                MIN_MAX_PREVIEW_BYTES, MAX_MAX_PREVIEW_BYTES, self.max_preview_bytes
            )));
        }

        Ok(())
    }
}
