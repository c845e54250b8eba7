//! Error types for the txtcrusher client.
//!
//! Pastebin reports failures as HTTP 200 responses whose body starts with
//! `Bad API request`. Those end up in [`PastebinError::Api`] with the body
//! text preserved; everything else is a transport, validation, decode or
//! configuration problem on our side.

use thiserror::Error;

/// Result type for txtcrusher operations.
pub type Result<T> = std::result::Result<T, PastebinError>;

/// Errors that can occur when talking to Pastebin.
#[derive(Error, Debug)]
pub enum PastebinError {
    /// Service error: the body started with `Bad API request`.
    #[error("{0}")]
    Api(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The account-info payload did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Rejected locally, nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A key required by the operation is not configured.
    #[error("Missing credential: no {0} configured")]
    MissingCredential(&'static str),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Service messages that mean the credentials themselves were rejected.
const AUTH_FAILURES: [&str; 4] = [
    "invalid api_dev_key",
    "invalid api_user_key",
    "invalid login",
    "account not active",
];

impl PastebinError {
    /// Returns true if the service rejected the developer key, user key or login.
    pub fn is_auth_error(&self) -> bool {
        match self {
            PastebinError::Api(message) => AUTH_FAILURES.iter().any(|m| message.contains(m)),
            _ => false,
        }
    }

    /// Returns the raw service text for service errors.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            PastebinError::Api(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the HTTP status code if the transport error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PastebinError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
