//! Inline image payloads for icon overlays.

use base64::Engine;

use crate::errors::IconError;

use super::label::{IconKind, LabelIcon};

/// Largest accepted upload (500 KiB)
pub const MAX_IMAGE_BYTES: usize = 500 * 1024;

/// A validated image, encoded as a self-contained `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    media_type: String,
    data_url: String,
}

impl ImageData {
    /// Validate and encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], media_type: &str) -> Result<Self, IconError> {
        if bytes.len() > MAX_IMAGE_BYTES {
            crate::log::warn!(size = bytes.len(), limit = MAX_IMAGE_BYTES, "rejecting oversized image");
            return Err(IconError::ImageTooLarge {
                size: bytes.len(),
                limit: MAX_IMAGE_BYTES,
            });
        }
        if bytes.is_empty() {
            return Err(IconError::EmptyImage);
        }
        let media_type = media_type.trim().to_ascii_lowercase();
        if !media_type.starts_with("image/") || media_type.len() == "image/".len() {
            return Err(IconError::UnsupportedMediaType { media_type });
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        crate::log::debug!(size = bytes.len(), media_type = %media_type, "encoded image icon");
        let data_url = format!("data:{media_type};base64,{encoded}");
        Ok(Self { media_type, data_url })
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Turn `base` into an image icon carrying this payload. Size, position
    /// and rotation are kept.
    pub fn into_icon(self, base: LabelIcon) -> LabelIcon {
        LabelIcon {
            kind: IconKind::Image,
            value: self.data_url,
            ..base
        }
    }
}
