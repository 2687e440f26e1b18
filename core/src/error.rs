//! Error types and handling for the docqa core library

use thiserror::Error;

/// Result type alias for docqa operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for docqa core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// API client errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Routing errors
    #[error("Router error: {0}")]
    Router(#[from] crate::router::RouterError),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// API client errors
///
/// Every failure of a client call lands in exactly one of these buckets.
/// Nothing is retried or swallowed; the caller decides what a failure means.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Undecodable response: {message}")]
    Decode { message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
