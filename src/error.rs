//! Error types for csdict
//!
//! Every variant renders as the numbered, operator-facing message printed
//! by the front end.

use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for csdict operations
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // Command Errors (local, no network traffic)
    // -------------------------------------------------------------------------
    #[error("900 Invalid command.")]
    InvalidCommand,

    #[error("901 Incorrect number of arguments.")]
    ArgumentCount,

    #[error("902 Invalid argument.")]
    InvalidArgument(String),

    #[error("903 Supplied command not expected at this time.")]
    UnexpectedCommand,

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("920 Control connection to {host} on port {port} failed to open.")]
    ConnectionFailed { host: String, port: u16 },

    #[error("925 Control connection I/O error, closing control connection.")]
    Io(#[from] std::io::Error),

    #[error("925 Control connection I/O error, closing control connection.")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("996 Too many command line options - Only -d is allowed.")]
    TooManyOptions,

    #[error("997 Invalid command line option - Only -d is allowed.")]
    InvalidOption(String),

    // -------------------------------------------------------------------------
    // Fatal Errors
    // -------------------------------------------------------------------------
    #[error("998 Input error while reading commands, terminating.")]
    HostResolution { host: String },

    #[error("998 Input error while reading commands, terminating.")]
    Input(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Everything Else
    // -------------------------------------------------------------------------
    #[error("999 Processing error. {0}")]
    Protocol(String),
}

impl DictError {
    /// Numeric code printed in front of the message
    pub fn code(&self) -> u16 {
        match self {
            DictError::InvalidCommand => 900,
            DictError::ArgumentCount => 901,
            DictError::InvalidArgument(_) => 902,
            DictError::UnexpectedCommand => 903,
            DictError::ConnectionFailed { .. } => 920,
            DictError::Io(_) | DictError::ConnectionClosed => 925,
            DictError::TooManyOptions => 996,
            DictError::InvalidOption(_) => 997,
            DictError::HostResolution { .. } | DictError::Input(_) => 998,
            DictError::Protocol(_) => 999,
        }
    }

    /// Whether the interactive loop must terminate
    pub fn is_fatal(&self) -> bool {
        matches!(self, DictError::HostResolution { .. } | DictError::Input(_))
    }

    /// Whether the control connection is unusable after this error
    pub fn is_connection_loss(&self) -> bool {
        matches!(
            self,
            DictError::ConnectionFailed { .. }
                | DictError::Io(_)
                | DictError::ConnectionClosed
                | DictError::Protocol(_)
        )
    }
}
