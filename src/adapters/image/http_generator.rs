//! HTTP image-generation adapter.
//!
//! Posts `{"prompt": ...}` to the configured service and consumes the
//! first entry of the returned `imageUrls` array. Single best-effort
//! attempt: the completion client's retry policy does not apply here, and
//! a failure leaves the finalized prompt available for a user retry.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ImageError, ImageGenerator};

/// Configuration for the HTTP image generator.
#[derive(Debug, Clone)]
pub struct ImageGeneratorConfig {
    /// Image-generation service URL.
    pub url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ImageGeneratorConfig {
    /// Creates a configuration for the given service URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Image generator backed by an HTTP service.
pub struct HttpImageGenerator {
    config: ImageGeneratorConfig,
    client: Client,
}

impl HttpImageGenerator {
    /// Creates a new generator with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Network` if the underlying HTTP client cannot be built
    pub fn new(config: ImageGeneratorConfig) -> Result<Self, ImageError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ImageError::network(format!("http client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ImageError> {
        let response = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(|e| ImageError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::ServiceError {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|_| ImageError::NoImageUrl)?;

        body.image_urls
            .into_iter()
            .next()
            .ok_or(ImageError::NoImageUrl)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(rename = "imageUrls", default)]
    image_urls: Vec<String>,
}
