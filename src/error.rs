//! Error types for respcli
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RespError
pub type Result<T> = std::result::Result<T, RespError>;

/// Unified error type for respcli operations
#[derive(Debug, Error)]
pub enum RespError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Transport failure, including a stream that ends mid-frame
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Leading byte or length field does not match the framing rules
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RespError {
    /// Shorthand for building a protocol error
    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        RespError::Protocol(message.into())
    }

    /// True when the peer closed the stream before a frame was complete
    pub fn is_eof(&self) -> bool {
        matches!(self, RespError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
