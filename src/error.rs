//! Error types for the Tradepulse client.

use thiserror::Error;

/// The main error type for Tradepulse.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// Identity token could not be attached to requests
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A request could not be sent, or its response could not be parsed.
    #[error("Network error: {0}")]
    Network(String),

    /// A read endpoint answered with a non-success status.
    #[error("{path} API failed: {status}")]
    Endpoint {
        /// Request path, e.g. `/api/balance`.
        path: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The mutating trade request answered with a non-success status.
    #[error("Trade API failed: {status}{}", reason_suffix(.reason))]
    Trade {
        /// HTTP status code.
        status: u16,
        /// Rejection reason reported by the backend, if any.
        reason: Option<String>,
    },

    /// User input rejected before any network call.
    #[error("Invalid amount: {0}")]
    Validation(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" ({r})"))
        .unwrap_or_default()
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new auth error.
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new endpoint error.
    pub fn endpoint(path: &'static str, status: u16) -> Self {
        Self::Endpoint { path, status }
    }

    /// Create a new trade error.
    pub fn trade(status: u16, reason: Option<String>) -> Self {
        Self::Trade { status, reason }
    }

    /// Check if this error is recoverable (the next poll or a retry may succeed).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Endpoint { .. } | Self::Channel(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
