use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_PROJECT_NAME_LENGTH: usize = 1;
pub const MAX_PROJECT_NAME_LENGTH: usize = 1000;
pub const DEFAULT_MAX_PROJECT_NAME_LENGTH: usize = 200;

pub const MIN_CANVAS_JSON_BYTES: usize = 1024;
pub const MAX_CANVAS_JSON_BYTES: usize = 50 * 1024 * 1024;
pub const DEFAULT_MAX_CANVAS_JSON_BYTES: usize = 5 * 1024 * 1024;

/// Field limits applied when saving projects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of a project name, in characters
    pub max_project_name_length: usize,
    /// Maximum size of the serialized canvas
    pub max_canvas_json_bytes: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_project_name_length: DEFAULT_MAX_PROJECT_NAME_LENGTH,
            max_canvas_json_bytes: DEFAULT_MAX_CANVAS_JSON_BYTES,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_project_name_length < MIN_PROJECT_NAME_LENGTH
            || self.max_project_name_length > MAX_PROJECT_NAME_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_project_name_length must be {}-{}, got {}",
                MIN_PROJECT_NAME_LENGTH, MAX_PROJECT_NAME_LENGTH, self.max_project_name_length
            )));
        }

        if self.max_canvas_json_bytes < MIN_CANVAS_JSON_BYTES
            || self.max_canvas_json_bytes > MAX_CANVAS_JSON_BYTES
        {
            return Err(ConfigError::config(format!(
                "validation.max_canvas_json_bytes must be {}-{}, got {}",
                MIN_CANVAS_JSON_BYTES, MAX_CANVAS_JSON_BYTES, self.max_canvas_json_bytes
            )));
        }

        Ok(())
    }
}
