//! Mock image generator for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{ImageError, ImageGenerator};

/// Mock image generator returning a fixed URL (or a scripted failure) and
/// recording the prompts it received.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    url: String,
    fail_with_status: Option<u16>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerator {
    /// Creates a mock that returns the given URL.
    pub fn returning(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fail_with_status: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock that fails with the given status.
    pub fn failing_with_status(status: u16) -> Self {
        Self {
            url: String::new(),
            fail_with_status: Some(status),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ImageError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.fail_with_status {
            Some(status) => Err(ImageError::ServiceError { status }),
            None => Ok(self.url.clone()),
        }
    }
}
