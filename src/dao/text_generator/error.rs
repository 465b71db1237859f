//! Failures reported by text generation backends.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`GenerationError`] failures.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Reasons a generation request did not produce text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No backend is installed (missing credentials).
    #[error("text generation is not configured")]
    NotConfigured,
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build text generation client")]
    ClientBuilder {
        /// Underlying builder failure.
        #[source]
        source: reqwest::Error,
    },
    /// The backend did not answer within the configured limit.
    #[error("text generation timed out")]
    Timeout,
    /// The request could not be delivered.
    #[error("text generation service unavailable")]
    ServiceUnavailable {
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status.
    #[error("text generation rejected with status {status}: {message}")]
    Rejected {
        /// Status returned by the backend.
        status: StatusCode,
        /// Error message from the response body, empty when absent.
        message: String,
    },
    /// The response payload could not be decoded.
    #[error("failed to decode text generation response")]
    Decode {
        /// Underlying decoding failure.
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered without any text.
    #[error("text generation returned no text")]
    EmptyResponse,
}

impl GenerationError {
    /// Classify a transport failure, keeping timeouts distinct.
    pub fn from_transport(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::ServiceUnavailable { source }
        }
    }
}
