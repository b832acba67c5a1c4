//! Generation error taxonomy
//!
//! Both variants are recovered locally: the engine logs the cause and
//! substitutes deterministic fallback output, so neither ever reaches an end
//! user as an error.

use thiserror::Error;

use crate::llm::LlmError;

/// Why a generation attempt failed
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Model text was not parseable into the expected JSON shape, or was
    /// missing required fields
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// Network, timeout, or provider error from the completion call
    #[error("generative client failure: {0}")]
    Client(#[from] LlmError),

    /// An embedded prompt template failed to render
    #[error("prompt template failure: {0}")]
    Template(#[from] handlebars::RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_errors_convert() {
        let err: GenerationError = LlmError::Timeout(Duration::from_secs(30)).into();
        assert!(matches!(err, GenerationError::Client(_)));
    }

    #[test]
    fn test_display_includes_cause() {
        let err = GenerationError::MalformedResponse("expected array".to_string());
        assert!(err.to_string().contains("expected array"));
    }
}
