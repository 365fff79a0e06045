//! Permission resolution
//!
//! Answers "does role R hold permission P?" with minimal network cost and a
//! fail-closed policy: a missing role, an unknown role or any fetch failure
//! all resolve to denial. The resolver never propagates an error to its
//! caller; uncertainty is collapsed to `false` and logged.

use crate::cache::PermissionCache;
use crate::types::WILDCARD_PERMISSION;
use std::sync::Arc;
use tracing::debug;

/// Fail-closed permission resolver over a shared [`PermissionCache`]
#[derive(Clone)]
pub struct PermissionResolver {
    cache: Arc<PermissionCache>,
}

impl PermissionResolver {
    /// Create a resolver over a cache
    pub fn new(cache: Arc<PermissionCache>) -> Self {
        Self { cache }
    }

    /// Whether `role` holds `permission`
    ///
    /// A `None` or empty role denies immediately without touching the
    /// network. The wildcard grant (`all_permissions`) satisfies every check.
    /// May populate the cache as a side effect.
    pub async fn has_permission(&self, role: Option<&str>, permission: &str) -> bool {
        let Some(role) = role.filter(|r| !r.is_empty()) else {
            debug!(permission, "permission check without a role, denying");
            return false;
        };

        let grants = self.cache.role_permissions(role).await;
        let allowed = grants.contains(permission) || grants.contains(WILDCARD_PERMISSION);
        debug!(role, permission, allowed, "permission check resolved");
        allowed
    }

    /// The cache backing this resolver
    pub fn cache(&self) -> &Arc<PermissionCache> {
        &self.cache
    }
}
