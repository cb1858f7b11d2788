//! Turning command-line arguments into request payloads.

use crate::{CliClientResult, ClientError};

use cover_core::ImageFormat;

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Canvas JSON from `--canvas` text or the contents of `--canvas-file`
pub fn read_canvas(canvas: Option<String>, canvas_file: Option<&Path>) -> CliClientResult<String> {
    match (canvas, canvas_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            std::fs::read_to_string(path).map_err(|e| ClientError::from_io(path, e))
        }
        (None, None) => Err(ClientError::input("either --canvas or --canvas-file is required")),
    }
}

/// Encode an image file as a `data:` URL the server accepts as a preview
pub fn preview_data_url(path: &Path) -> CliClientResult<String> {
    let bytes = std::fs::read(path).map_err(|e| ClientError::from_io(path, e))?;

    let format = ImageFormat::sniff(&bytes).ok_or_else(|| {
        ClientError::input(format!(
            "{} is not a PNG, JPEG, WebP or GIF image",
            path.display()
        ))
    })?;

    Ok(format!(
        "data:{};base64,{}",
        format.content_type(),
        STANDARD.encode(&bytes)
    ))
}
