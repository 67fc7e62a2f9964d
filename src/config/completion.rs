//! Completion service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Azure OpenAI completion service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Azure OpenAI endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: Option<String>,

    /// API key for the Azure OpenAI resource
    pub api_key: Option<String>,

    /// API version query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Deployment name of the chat model
    pub deployment: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CompletionConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate completion configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or(ValidationError::MissingRequired("COMPLETION__ENDPOINT"))?;

        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ValidationError::InvalidEndpoint);
        }

        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err(ValidationError::MissingRequired("COMPLETION__API_KEY"));
        }

        if self.deployment.as_deref().is_none_or(str::is_empty) {
            return Err(ValidationError::MissingRequired("COMPLETION__DEPLOYMENT"));
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            api_version: default_api_version(),
            deployment: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_version() -> String {
    "2024-02-01".to_string()
}

fn default_timeout() -> u64 {
    60
}
