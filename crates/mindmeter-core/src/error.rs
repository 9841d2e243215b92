//! Application error types.
//!
//! Every fallible operation in the client returns [`Error`]. The variants
//! mirror the failure classes the client distinguishes: transport problems,
//! non-success API responses, the expired session (the one status handled
//! globally), credential decoding failures, and local validation or cooldown
//! violations that never reach the network.

use thiserror::Error;

/// Crate-wide result alias used by all MindMeter client crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by all MindMeter client crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend answered 401. The session has already been cleared by the
    /// time this error is returned; the original response is abandoned.
    #[error("session expired, please log in again")]
    SessionExpired,

    /// Non-success response from the backend, other than 401.
    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Connection, timeout, or response body decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A bearer credential could not be decoded.
    #[error("invalid credential: {0}")]
    Credential(String),

    /// Local input validation failed before any request was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A client-side cooldown has not elapsed yet.
    #[error("please wait {remaining_secs}s before trying again")]
    Cooldown { remaining_secs: u64 },
}

impl Error {
    /// Builds an [`Error::Api`] from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Builds an [`Error::Credential`] from any displayable cause.
    pub fn credential(message: impl ToString) -> Self {
        Self::Credential(message.to_string())
    }

    /// Builds an [`Error::Validation`] from any displayable cause.
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation(message.to_string())
    }

    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
