//! # permgate
//!
//! Fail-closed, cached permission resolution for role-gated UIs backed by a
//! remote permissions API.
//!
//! The library sits between UI gating code and a permissions REST backend:
//! role grant sets are fetched lazily, memoized for the lifetime of the
//! process, and every failure on the read path collapses to denial. The
//! cache is an explicitly constructed value owned by the application's
//! composition root; nothing here is global state.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use permgate::{ClientConfig, HttpPermissionsApi, PermissionCache, PermissionResolver};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::builder()
//!         .with_base_url("https://api.example.com")
//!         .with_static_token("access-token")
//!         .build()?;
//!
//!     let api = Arc::new(HttpPermissionsApi::new(config)?);
//!     let cache = Arc::new(PermissionCache::new(api));
//!     let resolver = PermissionResolver::new(Arc::clone(&cache));
//!
//!     if resolver.has_permission(Some("manager"), "task_update").await {
//!         // render the edit control
//!     }
//!
//!     // On login, logout or role change:
//!     cache.reset();
//!     Ok(())
//! }
//! ```
//!
//! ## Gating UI regions
//!
//! [`PermissionGate`] wraps the resolver for UI consumers: it publishes
//! `{loading, allowed}` state over a watch channel and discards resolutions
//! superseded by a newer check, so out-of-order responses never overwrite
//! fresher state.

#![warn(clippy::all)]

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gate;
pub mod password;
pub mod resolver;
pub mod routes;
pub mod transport;
pub mod types;

// Re-export main types
pub use api::HttpPermissionsApi;
pub use cache::PermissionCache;
pub use config::{ClientConfig, ClientConfigBuilder, NoToken, StaticToken, TokenSource};
pub use error::{PermitError, Result};
pub use gate::{GateState, PermissionGate};
pub use password::{PasswordStrength, StrengthLabel, score_password};
pub use resolver::PermissionResolver;
pub use routes::{ALL_ROUTES, RouteAuthorizer, RoutePolicy};
pub use transport::PermissionTransport;
pub use types::{Permission, PermissionsResponse, RolePermissionsUpdate, WILDCARD_PERMISSION};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
