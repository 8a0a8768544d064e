//! Identity adapter: turns the server session into `AuthSnapshot`s.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: no requests; the snapshot stays as provided.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication and role lookup are separate requests so the router sees the
//! same sequence a hosted identity provider produces: loading, then signed in
//! with the role pending, then the resolved role.
//!
//! ERROR HANDLING
//! ==============
//! A failed session request reads as signed out. A failed role request after a
//! successful session reads as an unrecognised role, which lands on the generic
//! dashboard rather than a staff workspace.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::state::auth::{AuthSnapshot, Role};

pub const SESSION_ENDPOINT: &str = "/api/auth/me";
pub const ROLE_ENDPOINT: &str = "/api/auth/role";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Signed-in user as returned by the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Role claim as returned by the role endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RoleClaim {
    #[serde(default)]
    pub role: Option<String>,
}

/// Snapshot after the session request settles.
pub fn snapshot_for_session(user: Option<&SessionUser>) -> AuthSnapshot {
    match user {
        Some(_) => AuthSnapshot::role_pending(None),
        None => AuthSnapshot::signed_out(),
    }
}

/// Snapshot after the role request settles for a signed-in user.
pub fn snapshot_for_claim(claim: Option<&RoleClaim>) -> AuthSnapshot {
    let role = claim.and_then(|c| c.role.as_deref()).and_then(Role::from_claim);
    AuthSnapshot::signed_in(role)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} failed: {status}")
}

/// Fetch the signed-in user. `None` when signed out or on the server.
pub async fn fetch_session() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json::<SessionUser>(SESSION_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the role claim for the signed-in user.
pub async fn fetch_role_claim() -> Option<RoleClaim> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json::<RoleClaim>(ROLE_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(endpoint: &str) -> Option<T> {
    let resp = match gloo_net::http::Request::get(endpoint).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("session: {endpoint} request error: {e}");
            return None;
        }
    };
    if resp.status() == 401 {
        return None;
    }
    if !resp.ok() {
        log::warn!("session: {}", request_failed_message(endpoint, resp.status()));
        return None;
    }
    match resp.json::<T>().await {
        Ok(body) => Some(body),
        Err(e) => {
            log::warn!("session: {endpoint} returned malformed body: {e}");
            None
        }
    }
}

/// Run the identity check and publish each step to `auth`.
pub async fn refresh(auth: RwSignal<AuthSnapshot>) {
    auth.set(AuthSnapshot::loading());
    let user = fetch_session().await;
    auth.set(snapshot_for_session(user.as_ref()));
    if user.is_none() {
        return;
    }
    let claim = fetch_role_claim().await;
    auth.set(snapshot_for_claim(claim.as_ref()));
}

/// Start the identity check for this page load.
pub fn install(auth: RwSignal<AuthSnapshot>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(refresh(auth));
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// End the session and publish the signed-out snapshot.
pub fn sign_out(auth: RwSignal<AuthSnapshot>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("session: logout request error: {e}");
        }
        auth.set(AuthSnapshot::signed_out());
    });
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthSnapshot::signed_out());
}
