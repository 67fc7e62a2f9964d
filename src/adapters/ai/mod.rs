//! Completion client adapters.

mod azure_client;
mod mock_client;

pub use azure_client::{AzureClientConfig, AzureCompletionClient};
pub use mock_client::MockCompletionClient;
