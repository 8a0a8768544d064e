//! Auth-session snapshot as seen by the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider owns login, logout and role lookup. The router only
//! observes its output as discrete `AuthSnapshot` values and never mutates them.
//! Role resolution may lag behind authentication, so a snapshot can be
//! authenticated while its role is still pending.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Access-level claim attached to a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Translator,
    Partner,
    Support,
    User,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Superadmin, Role::Translator, Role::Partner, Role::Support, Role::User];

    /// Parse a raw role claim. Unknown claims yield `None`.
    pub fn from_claim(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "superadmin" => Some(Role::Superadmin),
            "translator" => Some(Role::Translator),
            "partner" => Some(Role::Partner),
            "support" => Some(Role::Support),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Translator => "translator",
            Role::Partner => "partner",
            Role::Support => "support",
            Role::User => "user",
        }
    }
}

/// Point-in-time view of authentication and role resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    /// The identity check for this page load has not finished.
    pub auth_loading: bool,
    pub role: Option<Role>,
    /// The role lookup finished; `role` is final even when `None`.
    pub role_resolved: bool,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

impl AuthSnapshot {
    /// Identity check still in flight.
    pub fn loading() -> Self {
        Self { is_authenticated: false, auth_loading: true, role: None, role_resolved: false }
    }

    /// Settled, no session.
    pub fn signed_out() -> Self {
        Self { is_authenticated: false, auth_loading: false, role: None, role_resolved: false }
    }

    /// Signed in, role lookup not finished. `role` may carry a provisional claim.
    pub fn role_pending(role: Option<Role>) -> Self {
        Self { is_authenticated: true, auth_loading: false, role, role_resolved: false }
    }

    /// Signed in with a final role.
    pub fn signed_in(role: Option<Role>) -> Self {
        Self { is_authenticated: true, auth_loading: false, role, role_resolved: true }
    }

    /// Authenticated but the role is not yet known.
    pub fn is_role_pending(&self) -> bool {
        self.is_authenticated && !self.role_resolved
    }

    /// Authenticated with a final role.
    pub fn is_role_ready(&self) -> bool {
        self.is_authenticated && self.role_resolved
    }
}
