//! Error types for Horizon account lookups.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying a Horizon endpoint.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS, connect, TLS, reset)
    #[error("request failed: {0}")]
    Transport(String),

    /// Horizon answered with a non-2xx status
    #[error("error fetching account: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The response body was not a valid account record
    #[error("malformed account record: {0}")]
    Decode(String),

    /// The base URL and address did not form a usable URL
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// HTTP status code, when the failure came from the remote service.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Decode(e.to_string())
        } else if e.is_builder() {
            Error::InvalidUrl(e.to_string())
        } else {
            Error::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}
