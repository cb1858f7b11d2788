//! Input validation shared by the server and any other writer of projects.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// A project name must contain at least one non-whitespace character and
/// stay within `max_length` characters. The name is stored as given.
#[track_caller]
pub fn validate_project_name(name: &str, max_length: usize) -> CoreErrorResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation {
            field: "project_name",
            message: "project_name cannot be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let length = name.chars().count();
    if length > max_length {
        return Err(CoreError::Validation {
            field: "project_name",
            message: format!(
                "project_name must be at most {} characters, got {}",
                max_length, length
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Canvas JSON is opaque to the store; only its size is bounded.
#[track_caller]
pub fn validate_canvas_json(canvas_json: &str, max_bytes: usize) -> CoreErrorResult<()> {
    if canvas_json.len() > max_bytes {
        return Err(CoreError::Validation {
            field: "canvas_json",
            message: format!(
                "canvas_json must be at most {} bytes, got {}",
                max_bytes,
                canvas_json.len()
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
