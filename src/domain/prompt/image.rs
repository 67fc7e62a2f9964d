//! Transport-safe image encoding for multimodal requests.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// An uploaded image encoded as a base64 PNG data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Encodes raw PNG bytes into a data URL.
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
    }

    /// Returns the data URL.
    pub fn data_url(&self) -> &str {
        &self.0
    }
}
