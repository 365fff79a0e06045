//! UI gating contract
//!
//! A [`PermissionGate`] is the async analog of a conditional-render guard:
//! the UI layer calls [`PermissionGate::check`] on mount and whenever the
//! (role, permission) pair changes, and observes `{loading, allowed}` state
//! through a watch channel. Until the first resolution completes the state
//! reads as loading, and a failed or denied resolution leaves protected
//! content withheld.
//!
//! Checks carry a generation number; a resolution that was superseded by a
//! newer check is discarded rather than overwriting fresher state, which
//! guards against out-of-order responses on slow networks.

use crate::resolver::PermissionResolver;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Observable state of a gated region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateState {
    /// Whether a check is still in flight
    pub loading: bool,
    /// Whether the last completed check granted access
    pub allowed: bool,
}

impl GateState {
    const INITIAL: Self = Self {
        loading: true,
        allowed: false,
    };
}

/// Async permission gate for a single protected UI region
pub struct PermissionGate {
    resolver: PermissionResolver,
    generation: AtomicU64,
    state: watch::Sender<GateState>,
}

impl PermissionGate {
    /// Create a gate over a resolver, starting in the loading state
    pub fn new(resolver: PermissionResolver) -> Self {
        let (state, _) = watch::channel(GateState::INITIAL);
        Self {
            resolver,
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Run a permission check and publish the outcome
    ///
    /// Returns `Some(allowed)` if this check's result was published, or
    /// `None` if a newer check was issued while this one was in flight (the
    /// stale result is discarded and state is left untouched).
    pub async fn check(&self, role: Option<&str>, permission: &str) -> Option<bool> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.publish_if_current(generation, GateState {
            loading: true,
            allowed: false,
        });

        let allowed = self.resolver.has_permission(role, permission).await;

        let published = self.publish_if_current(generation, GateState {
            loading: false,
            allowed,
        });
        if !published {
            debug!(permission, "discarding superseded permission check result");
            return None;
        }
        Some(allowed)
    }

    /// Subscribe to state transitions
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.subscribe()
    }

    /// Current gate state
    pub fn state(&self) -> GateState {
        *self.state.borrow()
    }

    fn publish_if_current(&self, generation: u64, next: GateState) -> bool {
        // The generation re-check runs under the sender's internal lock, so a
        // stale writer cannot clobber a newer check's published state.
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        })
    }
}
