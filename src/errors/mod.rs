//! Error types for hmock.
//!
//! The transport has exactly one failure path: the responder refused the
//! request. Whatever `HmockError` the responder produced is handed back to
//! the caller untouched. The remaining variants cover work the client does
//! before a request ever reaches the transport.

use thiserror::Error;

/// Result type alias for hmock operations.
pub type HmockResult<T> = Result<T, HmockError>;

/// Error type for hmock operations.
#[derive(Debug, Error)]
pub enum HmockError {
    /// The responder signalled failure for a request.
    #[error("{message}")]
    Responder {
        /// Failure detail supplied by the responder.
        message: String,
    },

    /// An integrator-defined failure returned by a responder.
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The request could not be built (bad URL, unsupported method).
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// A body could not be serialized or deserialized.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl HmockError {
    /// Creates a responder failure carrying `message`.
    pub fn responder(message: impl Into<String>) -> Self {
        HmockError::Responder {
            message: message.into(),
        }
    }

    /// Wraps an arbitrary error so a responder can return it.
    pub fn custom<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        HmockError::Custom(Box::new(error))
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        HmockError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Returns true if the error came out of a responder.
    pub fn is_responder(&self) -> bool {
        matches!(self, HmockError::Responder { .. } | HmockError::Custom(_))
    }
}

impl From<url::ParseError> for HmockError {
    fn from(err: url::ParseError) -> Self {
        HmockError::InvalidRequest {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<serde_json::Error> for HmockError {
    fn from(err: serde_json::Error) -> Self {
        HmockError::Serialization {
            message: err.to_string(),
        }
    }
}
