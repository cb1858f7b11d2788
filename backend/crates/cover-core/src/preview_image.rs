//! Decoding of client-supplied preview images.
//!
//! Clients send either a data URL (`data:image/png;base64,...`) or a bare
//! base64 string. Bare payloads are identified by their magic bytes.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use error_location::ErrorLocation;

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Image formats accepted as previews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [Self::Png, Self::Jpeg, Self::Webp, Self::Gif];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::Webp),
            "image/gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Identify a format from its leading magic bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else if bytes.starts_with(b"GIF8") {
            Some(Self::Gif)
        } else {
            None
        }
    }
}

/// A decoded preview ready to be written to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl PreviewImage {
    /// Decode a data URL or bare base64 payload, rejecting anything larger
    /// than `max_bytes` once decoded.
    #[track_caller]
    pub fn parse(input: &str, max_bytes: usize) -> CoreErrorResult<Self> {
        let input = input.trim();

        let (declared, encoded) = match input.strip_prefix(DATA_URL_PREFIX) {
            Some(rest) => {
                let (header, data) = rest
                    .split_once(',')
                    .ok_or_else(|| Self::invalid("data URL is missing ','"))?;
                let mime = header
                    .strip_suffix(BASE64_MARKER)
                    .ok_or_else(|| Self::invalid("data URL must be base64-encoded"))?;
                let format = ImageFormat::from_mime(mime)
                    .ok_or_else(|| Self::invalid(format!("unsupported image type '{}'", mime)))?;
                (Some(format), data)
            }
            None => (None, input),
        };

        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| Self::invalid(format!("base64 decode failed: {}", e)))?;

        if bytes.is_empty() {
            return Err(Self::invalid("image payload is empty"));
        }
        if bytes.len() > max_bytes {
            return Err(Self::invalid(format!(
                "image is {} bytes, limit is {}",
                bytes.len(),
                max_bytes
            )));
        }

        let format = match declared {
            Some(format) => format,
            None => ImageFormat::sniff(&bytes)
                .ok_or_else(|| Self::invalid("unrecognized image format"))?,
        };

        Ok(Self { format, bytes })
    }

    /// File name for this preview when stored for `project_id`
    pub fn file_name(&self, project_id: &str) -> String {
        format!("{}.{}", project_id, self.format.extension())
    }

    #[track_caller]
    fn invalid(message: impl Into<String>) -> CoreError {
        CoreError::InvalidPreviewImage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
