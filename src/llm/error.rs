//! Generative client error types

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by a generative text-completion client
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether a retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::RateLimited { .. } => true,
            LlmError::ApiError { status, .. } => *status >= 500,
            LlmError::Network(_) => true,
            LlmError::Timeout(_) => true,
            LlmError::InvalidResponse(_) => false,
            LlmError::Json(_) => false,
        }
    }

    /// Suggested wait before retrying, for rate-limit errors
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            LlmError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(
            LlmError::RateLimited {
                retry_after: Duration::from_secs(30)
            }
            .is_retryable()
        );
        assert!(
            LlmError::ApiError {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_retryable()
        );
        assert!(LlmError::Timeout(Duration::from_secs(30)).is_retryable());

        assert!(
            !LlmError::ApiError {
                status: 401,
                message: "unauthorized".to_string()
            }
            .is_retryable()
        );
        assert!(!LlmError::InvalidResponse("empty body".to_string()).is_retryable());
    }

    #[test]
    fn test_retry_after_only_for_rate_limits() {
        let limited = LlmError::RateLimited {
            retry_after: Duration::from_secs(42),
        };
        assert_eq!(limited.retry_after(), Some(Duration::from_secs(42)));

        let other = LlmError::InvalidResponse("nope".to_string());
        assert_eq!(other.retry_after(), None);
    }
}
