//! Shared error type across randstatus crates.

use std::io;

use thiserror::Error;

/// Stable error codes, emitted as the `code` field of fatal log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Config file unreadable, malformed, or rejected by validation.
    InvalidConfig,
    /// Config schema version not supported.
    UnsupportedVersion,
    /// Listener could not bind.
    BindFailed,
    /// Accept loop terminated.
    ServeFailed,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::BindFailed => "BIND_FAILED",
            ErrorCode::ServeFailed => "SERVE_FAILED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RandStatusError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum RandStatusError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("bind {addr} failed: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
}

impl RandStatusError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RandStatusError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            RandStatusError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            RandStatusError::Bind { .. } => ErrorCode::BindFailed,
            RandStatusError::Serve(_) => ErrorCode::ServeFailed,
        }
    }
}
