//! Image Generator Port - Interface to the external image-generation service.
//!
//! A thin boundary: the core hands over a finalized prompt and consumes the
//! first returned image URL. No retry policy beyond a single best-effort
//! attempt; a failure leaves the final prompt available for the user to
//! retry.

use async_trait::async_trait;

/// Port for the external image-generation collaborator.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates an image for the finalized prompt, returning the URL of
    /// the first rendered image.
    async fn generate(&self, prompt: &str) -> Result<String, ImageError>;
}

/// Image generation errors.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Transport-level failure reaching the service.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("image service returned status {status}")]
    ServiceError {
        /// Status code returned.
        status: u16,
    },

    /// A 2xx response without a usable image URL.
    #[error("no image url in response")]
    NoImageUrl,
}

impl ImageError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
