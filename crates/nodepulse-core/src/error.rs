//! Shared error type across nodepulse crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input (config).
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Host metric could not be read.
    MetricUnavailable,
    /// Report could not be serialized.
    SerializationFailure,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::MetricUnavailable => "METRIC_UNAVAILABLE",
            ClientCode::SerializationFailure => "SERIALIZATION_FAILURE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NodePulseError>;

/// Unified error type used by core and agent.
#[derive(Debug, Error)]
pub enum NodePulseError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("metric unavailable: {0}")]
    MetricUnavailable(String),
    #[error("serialization failure: {0}")]
    SerializationFailure(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NodePulseError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            NodePulseError::BadRequest(_) => ClientCode::BadRequest,
            NodePulseError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            NodePulseError::MetricUnavailable(_) => ClientCode::MetricUnavailable,
            NodePulseError::SerializationFailure(_) => ClientCode::SerializationFailure,
            NodePulseError::Internal(_) => ClientCode::Internal,
        }
    }
}
