//! Error handling for permgate
//!
//! Failures on the gating read path are absorbed at the cache/resolver
//! boundary and surface to callers as denial; this type exists so logs and
//! the write path can still tell causes apart.

use thiserror::Error;

/// Result type alias for permgate
pub type Result<T> = std::result::Result<T, PermitError>;

/// Main error type for permgate
#[derive(Error, Debug)]
pub enum PermitError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Application-level API failures (`success: false` envelopes)
    #[error("API error: {0}")]
    Api(String),
}

impl PermitError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }
}
