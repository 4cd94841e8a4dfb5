//! # Remote Errors
//!
//! Failures of the optional remote parser. None of them is fatal: each one
//! sends the interpreter down the local rule-based path.

use thiserror::Error;

/// Errors that can occur while asking the remote parser.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No reply at all (network failure, no service configured).
    #[error("Remote parser unavailable: {0}")]
    Unavailable(String),

    /// Non-success HTTP status without an error payload.
    #[error("Remote parser returned status {0}")]
    Status(u16),

    /// The service answered with an `{"error": ...}` payload.
    #[error("Remote parser error: {0}")]
    Service(String),

    /// The reply body is not the expected JSON.
    #[error("Malformed remote reply: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

// =============================================================================
// TESTS
// =============================================================================
