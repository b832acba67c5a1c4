//! Generative model clients
//!
//! The [`GenerativeClient`] trait is the engine's only I/O boundary. Two
//! HTTP implementations are provided, selected by the `provider` field in
//! [`LlmConfig`](crate::config::LlmConfig).

use std::sync::Arc;

use tracing::debug;

mod anthropic;
pub mod client;
mod error;
mod openai;
mod types;

pub use anthropic::AnthropicClient;
pub use client::GenerativeClient;
pub use error::LlmError;
pub use openai::OpenAIClient;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, StopReason, TokenUsage};

use crate::config::LlmConfig;

/// Create a client for the provider named in the config
///
/// Supports "openai" and "anthropic".
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn GenerativeClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "creating generative client");
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAIClient::from_config(config)?)),
        "anthropic" => Ok(Arc::new(AnthropicClient::from_config(config)?)),
        other => Err(LlmError::InvalidResponse(format!(
            "unknown provider: '{}'. Supported: openai, anthropic",
            other
        ))),
    }
}
