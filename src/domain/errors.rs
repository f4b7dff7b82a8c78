//! Domain error types
//!
//! Error hierarchy for the review engine and its collaborators. All errors
//! are domain-specific and don't expose third-party types.
//!
//! Entity-store edit operations are deliberately infallible: unknown ids
//! and empty selections are silent no-ops (stale selections are an expected
//! consequence of UI-driven editing), so no error variants exist for them.

use thiserror::Error;

/// Main application error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum AnonymizeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Analysis-service errors
    #[error("Analysis service error: {0}")]
    Service(#[from] ServiceError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Analysis-service-specific errors
///
/// Errors that occur when talking to the local analysis service. These
/// don't expose third-party HTTP client types. The client performs no
/// internal retries; retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Failed to reach the analysis service
    #[error("Failed to connect to analysis service: {0}")]
    ConnectionFailed(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response from analysis service: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),
}
