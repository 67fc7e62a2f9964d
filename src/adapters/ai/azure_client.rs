//! Azure-style completion client adapter.
//!
//! Implements the `CompletionClient` port against a hosted chat-completion
//! deployment:
//! `POST {endpoint}/openai/deployments/{deployment}/chat/completions?api-version={v}`
//! with an `api-key` header.
//!
//! Owns the retry policy: up to 5 attempts with deterministic exponential
//! backoff (1, 2, 4, 8 seconds, capped at 32, no jitter). Every non-2xx
//! status and every transport failure is treated as transient; exhaustion
//! surfaces as `MaxAttemptsExceeded` wrapping the last cause. The client
//! holds no mutable state, so concurrent sessions never share a retry wait.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    ChatMessage, CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
};

/// Maximum attempts per call, the first included.
const MAX_ATTEMPTS: u32 = 5;
/// First backoff delay.
const BASE_DELAY: Duration = Duration::from_secs(1);
/// Backoff ceiling.
const MAX_DELAY: Duration = Duration::from_secs(32);

/// Configuration for the Azure completion client.
#[derive(Debug, Clone)]
pub struct AzureClientConfig {
    /// API key for the `api-key` header.
    api_key: Secret<String>,
    /// Service endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    /// API version query parameter.
    pub api_version: String,
    /// Deployment (model) name.
    pub deployment: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl AzureClientConfig {
    /// Creates a configuration with the required connection settings.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            endpoint: endpoint.into(),
            api_version: api_version.into(),
            deployment: deployment.into(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Completion client for an Azure-style chat-completion deployment.
pub struct AzureCompletionClient {
    config: AzureClientConfig,
    client: Client,
}

impl AzureCompletionClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the underlying HTTP client cannot be built
    pub fn new(config: AzureClientConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::invalid_request(format!("http client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version,
        )
    }

    /// Issues a single attempt and parses the response.
    async fn send_once(&self, body: &AzureRequest) -> Result<CompletionResponse, CompletionError> {
        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    CompletionError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::http_status(status.as_u16(), body));
        }

        let parsed: AzureResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::malformed(format!("response body: {e}")))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::malformed("no choices in response"))?;

        Ok(CompletionResponse::new(choice.message.content))
    }
}

#[async_trait]
impl CompletionClient for AzureCompletionClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        if !request.is_well_formed() {
            return Err(CompletionError::invalid_request(
                "message list must be non-empty and start with a system message",
            ));
        }

        let body = AzureRequest {
            messages: request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        with_backoff(|| self.send_once(&body)).await
    }
}

/// Runs an attempt up to [`MAX_ATTEMPTS`] times with deterministic
/// exponential backoff between attempts.
///
/// Sleeps only when a further attempt remains; a non-retryable error ends
/// the loop immediately without consuming the budget.
pub(crate) async fn with_backoff<F, Fut>(
    mut attempt_fn: F,
) -> Result<CompletionResponse, CompletionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<CompletionResponse, CompletionError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match attempt_fn().await {
            Ok(response) => return Ok(response),
            Err(err) => {
                if !err.is_retryable() {
                    return Err(err);
                }

                tracing::warn!(
                    attempt = attempt + 1,
                    max_attempts = MAX_ATTEMPTS,
                    error = %err,
                    "completion attempt failed"
                );

                if attempt + 1 >= MAX_ATTEMPTS {
                    return Err(CompletionError::max_attempts(MAX_ATTEMPTS, err));
                }

                let delay = backoff_delay(attempt);
                tracing::debug!(delay_secs = delay.as_secs(), "retrying after backoff");
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Delay before the retry following the zero-indexed `attempt`:
/// `min(BASE_DELAY * 2^attempt, MAX_DELAY)`.
fn backoff_delay(attempt: u32) -> Duration {
    BASE_DELAY
        .checked_mul(1u32 << attempt.min(31))
        .map_or(MAX_DELAY, |d| d.min(MAX_DELAY))
}

// ----- Azure API types -----

#[derive(Debug, Serialize)]
struct AzureRequest {
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct AzureResponse {
    choices: Vec<AzureChoice>,
}

#[derive(Debug, Deserialize)]
struct AzureChoice {
    message: AzureChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct AzureChoiceMessage {
    content: String,
}
