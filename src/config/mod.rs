//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROMPT_LOOM_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use prompt_loom::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod completion;
mod error;
mod image;

pub use completion::CompletionConfig;
pub use error::{ConfigError, ValidationError};
pub use image::ImageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the prompt refinement service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Completion service configuration (Azure OpenAI)
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Image generation service configuration
    #[serde(default)]
    pub image: ImageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROMPT_LOOM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROMPT_LOOM__COMPLETION__ENDPOINT=...` -> `completion.endpoint = ...`
    /// - `PROMPT_LOOM__IMAGE__GENERATION_URL=...` -> `image.generation_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROMPT_LOOM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.completion.validate()?;
        self.image.validate()?;
        Ok(())
    }
}
