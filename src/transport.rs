//! Transport seam for the remote permissions API
//!
//! The cache talks to the API exclusively through [`PermissionTransport`],
//! which keeps the HTTP layer swappable and the cache unit-testable with a
//! mock transport.

use crate::error::Result;
use crate::types::PermissionsResponse;
use async_trait::async_trait;

/// Abstraction over the remote permissions API
///
/// Implementations return `Err` for transport and decode failures and an
/// envelope with `success: false` for application-level failures; callers on
/// the gating path collapse both into an empty result.
#[async_trait]
pub trait PermissionTransport: Send + Sync {
    /// Fetch the full permission catalog
    async fn fetch_all_permissions(&self) -> Result<PermissionsResponse>;

    /// Fetch the permissions granted to a role
    async fn fetch_role_permissions(&self, role: &str) -> Result<PermissionsResponse>;

    /// Replace a role's permission grants
    async fn update_role_permissions(
        &self,
        role: &str,
        permission_names: &[String],
    ) -> Result<PermissionsResponse>;
}

#[cfg(test)]
mockall::mock! {
    pub Transport {}

    #[async_trait]
    impl PermissionTransport for Transport {
        async fn fetch_all_permissions(&self) -> Result<PermissionsResponse>;
        async fn fetch_role_permissions(&self, role: &str) -> Result<PermissionsResponse>;
        async fn update_role_permissions(
            &self,
            role: &str,
            permission_names: &[String],
        ) -> Result<PermissionsResponse>;
    }
}
