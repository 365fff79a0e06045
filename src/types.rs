//! Data model for the permissions API
//!
//! Permissions are immutable once fetched and sourced only from the remote
//! API. Roles are opaque strings throughout: the cache boundary accepts any
//! string and an unknown role simply resolves to an empty grant set.

use serde::{Deserialize, Serialize};

/// Wildcard permission name. A role holding it passes every check.
pub const WILDCARD_PERMISSION: &str = "all_permissions";

/// A named capability granted to one or more roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Permission identifier
    pub id: String,
    /// Capability name checked by gating code (e.g. "task_update")
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Roles that grant this permission
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Wire envelope returned by every permissions endpoint
///
/// The `success` flag is the sole discriminator of application-level failure;
/// no schema validation happens beyond deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionsResponse {
    /// Whether the request succeeded
    pub success: bool,
    /// Granted permissions; empty on failure
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Optional informational message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional server-supplied error detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PermissionsResponse {
    /// Names of the returned permissions, in response order
    pub fn permission_names(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.name.clone()).collect()
    }
}

/// Request body for replacing a role's grants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermissionsUpdate {
    /// Role being updated
    pub role: String,
    /// Full replacement set of permission names
    #[serde(rename = "permissionNames")]
    pub permission_names: Vec<String>,
}
