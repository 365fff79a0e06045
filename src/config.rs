//! Client configuration
//!
//! Configurations are built through [`ClientConfigBuilder`] and validated at
//! build time. `PERMGATE_BASE_URL` and `PERMGATE_ACCESS_TOKEN` provide
//! environment overrides for deployments that do not construct the builder
//! themselves.

use crate::error::{PermitError, Result};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "PERMGATE_BASE_URL";
/// Environment variable supplying a static bearer token
pub const ENV_ACCESS_TOKEN: &str = "PERMGATE_ACCESS_TOKEN";

/// Source of the bearer token attached to every API request
///
/// The token is queried per request, so rotating credentials take effect
/// without rebuilding the client. Returning `None` sends the request without
/// an `Authorization` header; rejecting it is the server's concern.
pub trait TokenSource: Send + Sync {
    /// Current bearer token, if any
    fn token(&self) -> Option<String>;
}

/// Token source backed by a fixed string
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Token source that never supplies a token
#[derive(Debug, Clone, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Configuration for the permissions API client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the permissions API (e.g. `https://api.example.com`)
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
    /// Bearer token source
    pub token_source: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Start building a configuration
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Build a configuration from `PERMGATE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(ENV_BASE_URL)
            .map_err(|_| PermitError::config(format!("{} is not set", ENV_BASE_URL)))?;

        let mut builder = ClientConfigBuilder::new().with_base_url(base_url);
        if let Ok(token) = env::var(ENV_ACCESS_TOKEN) {
            builder = builder.with_static_token(token);
        }
        builder.build()
    }
}

/// Builder for [`ClientConfig`]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Duration,
    user_agent: String,
    token_source: Arc<dyn TokenSource>,
}

impl ClientConfigBuilder {
    /// Create a new builder with default timeout and user agent
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("permgate/{}", env!("CARGO_PKG_VERSION")),
            token_source: Arc::new(NoToken),
        }
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a fixed bearer token
    pub fn with_static_token(mut self, token: impl Into<String>) -> Self {
        self.token_source = Arc::new(StaticToken(token.into()));
        self
    }

    /// Use a custom token source (e.g. one reading session storage)
    pub fn with_token_source(mut self, source: Arc<dyn TokenSource>) -> Self {
        self.token_source = source;
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<ClientConfig> {
        let raw = self
            .base_url
            .ok_or_else(|| PermitError::config("base_url is required"))?;
        let base_url = Url::parse(&raw)?;
        if base_url.cannot_be_a_base() {
            return Err(PermitError::config(format!(
                "base_url {} cannot serve as a base",
                base_url
            )));
        }

        Ok(ClientConfig {
            base_url,
            timeout: self.timeout,
            user_agent: self.user_agent,
            token_source: self.token_source,
        })
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
