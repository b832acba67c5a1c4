//! GenerativeClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless text-completion client
///
/// Each call is independent; no conversation state is kept between calls.
/// This is the engine's single I/O boundary: everything on either side of it
/// is a pure function. Implementations must bound the call with a timeout so
/// callers can fall back deterministically.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send one completion request and wait for the full response
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
