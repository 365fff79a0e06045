//! Process-lifetime permission cache
//!
//! Memoizes role grant sets and the full permission catalog for the lifetime
//! of the process. There is no TTL, no LRU and no size bound: the key space
//! is the handful of roles in the system, not per-user. The cache therefore
//! has no automatic invalidation tied to authentication state — callers must
//! invoke [`PermissionCache::reset`] on login, logout or role change.
//!
//! Failed lookups cache the empty set as the known-empty result for the rest
//! of the process; `reset` is the recovery path. Concurrent first lookups for
//! the same role may each issue a fetch (there is no single-flight
//! de-duplication); both return the same data and the last write wins.

use crate::error::{PermitError, Result};
use crate::transport::PermissionTransport;
use crate::types::{Permission, PermissionsResponse};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Memoized role → grant-set mapping plus the singleton permission catalog
pub struct PermissionCache {
    transport: Arc<dyn PermissionTransport>,
    catalog: RwLock<Option<Arc<Vec<Permission>>>>,
    roles: RwLock<HashMap<String, Arc<HashSet<String>>>>,
}

impl PermissionCache {
    /// Create a cache over the given transport
    pub fn new(transport: Arc<dyn PermissionTransport>) -> Self {
        Self {
            transport,
            catalog: RwLock::new(None),
            roles: RwLock::new(HashMap::new()),
        }
    }

    /// Permission names granted to a role
    ///
    /// Returns the cached set when present, otherwise fetches, stores and
    /// returns it. Never errors: transport failures, decode failures and
    /// `success: false` envelopes all yield the empty set, which is cached.
    pub async fn role_permissions(&self, role: &str) -> Arc<HashSet<String>> {
        if let Some(cached) = self.roles.read().get(role) {
            debug!(role, "role permission cache hit");
            return Arc::clone(cached);
        }

        // Lock is released during the fetch; a racing lookup may fetch too.
        let names = match self.transport.fetch_role_permissions(role).await {
            Ok(envelope) => Self::names_from(role, envelope),
            Err(err) => {
                warn!(role, error = %err, "role permission fetch failed, caching empty set");
                HashSet::new()
            }
        };

        let names = Arc::new(names);
        self.roles
            .write()
            .insert(role.to_string(), Arc::clone(&names));
        debug!(role, count = names.len(), "cached role permissions");
        names
    }

    /// The full permission catalog, fetched at most once unless reset
    ///
    /// Failures yield an empty catalog which is cached like any other result.
    pub async fn all_permissions(&self) -> Arc<Vec<Permission>> {
        if let Some(cached) = self.catalog.read().as_ref() {
            debug!("permission catalog cache hit");
            return Arc::clone(cached);
        }

        let permissions = match self.transport.fetch_all_permissions().await {
            Ok(envelope) if envelope.success => envelope.permissions,
            Ok(envelope) => {
                warn!(
                    error = envelope.error.as_deref().unwrap_or("unspecified"),
                    "permission catalog fetch unsuccessful, caching empty catalog"
                );
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "permission catalog fetch failed, caching empty catalog");
                Vec::new()
            }
        };

        let permissions = Arc::new(permissions);
        *self.catalog.write() = Some(Arc::clone(&permissions));
        debug!(count = permissions.len(), "cached permission catalog");
        permissions
    }

    /// Replace a role's grants on the server
    ///
    /// On success the role's cached entry and the catalog are dropped so the
    /// next read observes the server's canonical state. Unlike the read path
    /// this is an administrative operation and propagates errors.
    pub async fn update_role_permissions(
        &self,
        role: &str,
        permission_names: &[String],
    ) -> Result<()> {
        let envelope = self
            .transport
            .update_role_permissions(role, permission_names)
            .await?;
        if !envelope.success {
            return Err(PermitError::api(
                envelope
                    .error
                    .unwrap_or_else(|| format!("failed to update permissions for role {}", role)),
            ));
        }

        self.roles.write().remove(role);
        *self.catalog.write() = None;
        debug!(role, "role permissions updated, cache entries invalidated");
        Ok(())
    }

    /// Clear the catalog and every role entry
    ///
    /// Must be called whenever the authenticated identity or role changes.
    pub fn reset(&self) {
        self.roles.write().clear();
        *self.catalog.write() = None;
        debug!("permission cache reset");
    }

    fn names_from(role: &str, envelope: PermissionsResponse) -> HashSet<String> {
        if envelope.success {
            envelope.permissions.into_iter().map(|p| p.name).collect()
        } else {
            warn!(
                role,
                error = envelope.error.as_deref().unwrap_or("unspecified"),
                "role permission fetch unsuccessful, caching empty set"
            );
            HashSet::new()
        }
    }
}
