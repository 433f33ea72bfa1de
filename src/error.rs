//! Error types for dictwire
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for dictwire operations
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Connection is closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed by server before the reply was complete")]
    UnexpectedEof,

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Server Refusals
    // -------------------------------------------------------------------------
    #[error("Server error {code}: {message}")]
    Server { code: u16, message: String },

    #[error("Command not implemented by server: {0}")]
    NotImplemented(String),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DictError {
    /// True for failures establishing the connection or its handshake
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DictError::Connection(_))
    }

    /// True for failures during a command/response exchange
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            DictError::Io(_)
                | DictError::UnexpectedEof
                | DictError::Protocol(_)
                | DictError::Server { .. }
                | DictError::NotImplemented(_)
        )
    }

    /// True when the reply stream can no longer be trusted to be in sync,
    /// so the connection must not be reused.
    pub(crate) fn is_fatal(&self) -> bool {
        matches!(
            self,
            DictError::Io(_) | DictError::UnexpectedEof | DictError::Protocol(_)
        )
    }
}
