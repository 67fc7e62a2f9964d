//! Mock completion client for testing.
//!
//! A configurable implementation of the `CompletionClient` port so tests
//! can drive full conversation rounds without a real endpoint.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Error injection for failure-path testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockCompletionClient::new()
//!     .with_response("What colors should dominate?")
//!     .with_response("Try a stormy sky.");
//!
//! let response = client.complete(request).await?;
//! assert_eq!(response.content, "What colors should dominate?");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{CompletionClient, CompletionError, CompletionRequest, CompletionResponse};

/// A configured mock outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    /// Return this content.
    Success(String),
    /// Fail with a terminal max-attempts error.
    Exhausted,
    /// Fail with a malformed-response error.
    Malformed,
}

/// Mock completion client with scripted outcomes.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionClient {
    /// Creates a mock with no scripted outcomes.
    ///
    /// An unscripted call fails with `MaxAttemptsExceeded`, which keeps
    /// accidental extra calls loud in tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(content.into()));
        self
    }

    /// Queues a terminal `MaxAttemptsExceeded` failure.
    pub fn with_exhausted_failure(self) -> Self {
        self.outcomes.lock().unwrap().push_back(MockOutcome::Exhausted);
        self
    }

    /// Queues a `MalformedResponse` failure.
    pub fn with_malformed_failure(self) -> Self {
        self.outcomes.lock().unwrap().push_back(MockOutcome::Malformed);
        self
    }

    /// Returns the recorded requests, in call order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns how many calls were made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(request);

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockOutcome::Success(content)) => Ok(CompletionResponse::new(content)),
            Some(MockOutcome::Malformed) => Err(CompletionError::malformed("scripted failure")),
            Some(MockOutcome::Exhausted) | None => Err(CompletionError::max_attempts(
                5,
                CompletionError::network("scripted failure"),
            )),
        }
    }
}
