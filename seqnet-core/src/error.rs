//! Structured error types for the seqnet workspace.

use thiserror::Error;

/// Unified error type for all seqnet operations.
#[derive(Debug, Error)]
pub enum SeqnetError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error, raised before any file I/O
    #[error("configuration error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the seqnet workspace.
pub type Result<T> = std::result::Result<T, SeqnetError>;
