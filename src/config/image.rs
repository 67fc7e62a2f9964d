//! Image generation service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Image generation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// Endpoint accepting prompt POSTs and returning image URLs
    pub generation_url: Option<String>,

    /// Request timeout in seconds (image generation is slow)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ImageConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate image configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self
            .generation_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingRequired("IMAGE__GENERATION_URL"))?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ValidationError::InvalidImageUrl);
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            generation_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ImageConfig::default();
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = ImageConfig {
            generation_url: Some("https://images.example.com/generate".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_url() {
        let config = ImageConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_non_http_url() {
        let config = ImageConfig {
            generation_url: Some("images.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidImageUrl)
        ));
    }
}
