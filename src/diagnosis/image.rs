use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

/// MIME type assumed when the image arrives as bare base64.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidImage {
    #[error("Image is empty")]
    Empty,
    #[error("Image data URL is malformed")]
    MalformedDataUrl,
    #[error("Image data URL is not base64 encoded")]
    NotBase64Url,
    #[error("Image is not valid base64: {0}")]
    Base64(String),
}

/// Base64 image forwarded to the model as inline data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Encodes raw file bytes, e.g. a photo picked in the browser.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let mime_type = if mime_type.is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime_type
        };

        Self {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Accepts either `data:<mime>;base64,<data>` or bare base64 data.
    pub fn from_data_url(value: &str) -> Result<Self, InvalidImage> {
        let value = value.trim();

        let Some(rest) = value.strip_prefix("data:") else {
            return Self::validated(DEFAULT_MIME_TYPE, value);
        };

        let (header, data) = rest
            .split_once(',')
            .ok_or(InvalidImage::MalformedDataUrl)?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or(InvalidImage::NotBase64Url)?;
        let mime_type = if mime_type.is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime_type
        };

        Self::validated(mime_type, data)
    }

    /// The `data:` URL form, usable directly as an `img` source.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    fn validated(mime_type: &str, data: &str) -> Result<Self, InvalidImage> {
        if data.is_empty() {
            return Err(InvalidImage::Empty);
        }

        STANDARD
            .decode(data)
            .map_err(|e| InvalidImage::Base64(e.to_string()))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }
}
