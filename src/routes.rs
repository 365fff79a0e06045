//! Route-level authorization
//!
//! A static role → route-policy map consulted by the routing shell before a
//! navigation commits. Unlike the permission resolver this never touches the
//! network: policies are part of client configuration. A `*` entry grants
//! every route; otherwise a path is allowed when it starts with one of the
//! policy's route prefixes. Missing or unknown roles deny.

use std::collections::HashMap;

/// Wildcard route entry granting access to every path
pub const ALL_ROUTES: &str = "*";

/// Routes a role may access and where it lands after login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    /// Allowed route prefixes, or `["*"]` for everything
    pub can_access: Vec<String>,
    /// Post-login landing path
    pub default_route: String,
}

impl RoutePolicy {
    /// Create a policy from route prefixes and a landing path
    pub fn new<I, S>(can_access: I, default_route: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            can_access: can_access.into_iter().map(Into::into).collect(),
            default_route: default_route.into(),
        }
    }

    fn allows(&self, path: &str) -> bool {
        self.can_access
            .iter()
            .any(|allowed| allowed == ALL_ROUTES || path.starts_with(allowed.as_str()))
    }
}

/// Role-keyed route authorization map
#[derive(Debug, Clone)]
pub struct RouteAuthorizer {
    policies: HashMap<String, RoutePolicy>,
}

impl RouteAuthorizer {
    /// Create an authorizer with no policies (denies everything)
    pub fn new() -> Self {
        Self {
            policies: HashMap::new(),
        }
    }

    /// Stock policy set: `admin` can reach every route, `employee` only the
    /// team area; both land on `/team` after login.
    pub fn with_default_policies() -> Self {
        Self::new()
            .with_policy("admin", RoutePolicy::new([ALL_ROUTES], "/team"))
            .with_policy("employee", RoutePolicy::new(["/team"], "/team"))
    }

    /// Register a policy for a role, replacing any existing one
    pub fn with_policy(mut self, role: impl Into<String>, policy: RoutePolicy) -> Self {
        self.policies.insert(role.into(), policy);
        self
    }

    /// Whether `role` may navigate to `path`
    ///
    /// Missing or unknown roles deny.
    pub fn is_authorized(&self, role: Option<&str>, path: &str) -> bool {
        let Some(policy) = role.and_then(|r| self.policies.get(r)) else {
            return false;
        };
        policy.allows(path)
    }

    /// Post-login landing path for a role
    pub fn default_route(&self, role: &str) -> Option<&str> {
        self.policies
            .get(role)
            .map(|policy| policy.default_route.as_str())
    }
}

impl Default for RouteAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}
