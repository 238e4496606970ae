//! Domain error types
//!
//! This module defines the error hierarchy for AI Shield. All errors are
//! domain-specific and don't expose third-party types (in particular, the
//! HTTP client's error type never leaks out of the remote adapter).

use thiserror::Error;

/// Main AI Shield error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum ShieldError {
    /// Configuration-related errors, including malformed pattern rules
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote scanning service errors
    #[error("Remote service error: {0}")]
    Remote(#[from] RemoteError),

    /// A span list that cannot be redacted safely
    #[error("Invalid span list: {0}")]
    InvalidSpans(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Remote scanning service errors
///
/// Every variant is recoverable by the fallback orchestrator. These errors
/// don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Failed to reach the remote service
    #[error("Failed to connect to remote service: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within its time bound
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The service answered with a non-success status
    #[error("Unexpected status: {status} - {message}")]
    Status { status: u16, message: String },

    /// The response body could not be understood
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl RemoteError {
    /// Short machine-friendly name used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConnectionFailed(_) => "connection_failed",
            Self::Timeout(_) => "timeout",
            Self::Status { .. } => "status",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ShieldError {
    fn from(err: std::io::Error) -> Self {
        ShieldError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ShieldError {
    fn from(err: serde_json::Error) -> Self {
        ShieldError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ShieldError {
    fn from(err: toml::de::Error) -> Self {
        ShieldError::Configuration(format!("TOML parse error: {err}"))
    }
}
