//! Navigation and authorization state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three sources drive the router independently: browser back/forward
//! (`PopState`), the identity provider (`Auth` snapshots, including the
//! deferred role), and page-level navigation requests (`Navigate`). The
//! controller folds each event into `RouterState` and decides which view is
//! rendered. Events run to completion one at a time on the UI thread.
//!
//! REDIRECT GUARD
//! ==============
//! `has_redirected_this_session` is reset only when the authenticated flag
//! flips and is set immediately before an automatic redirect. It is the only
//! thing that stops an auth page and its role target from bouncing forever.
//!
//! Snapshots still marked `auth_loading` are stored for rendering but are not
//! observations: they neither end bootstrap nor run the guard. The first
//! settled snapshot skips only the flip rule; the guard sees it like any other.
//!
//! Signing in from the login view shown in place of a protected page lands on
//! the role's target, in one guarded redirect once the role resolves.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use super::auth::{AuthSnapshot, Role};
use super::navigation::{History, NavigationStore};
use crate::routes::{Page, is_auth_route, is_protected_route, is_public_route, target_for};

/// Input to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterEvent {
    /// The identity provider published a new snapshot.
    Auth(AuthSnapshot),
    /// The browser moved to another history entry.
    PopState,
    /// A page asked to navigate.
    Navigate(Page),
}

/// Observable router state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouterState {
    pub current_page: Page,
    /// `None` until the first settled auth snapshot.
    pub previous_authenticated: Option<bool>,
    pub has_redirected_this_session: bool,
}

/// What the app shell should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Placeholder while auth or role is unknown.
    Loading,
    /// The view for `current_page`.
    Page(Page),
    /// A different view rendered in place; `current_page` and the URL are untouched.
    Substitute(Page),
}

impl View {
    /// The page whose view is shown, if any.
    pub fn page(self) -> Option<Page> {
        match self {
            View::Loading => None,
            View::Page(page) | View::Substitute(page) => Some(page),
        }
    }
}

/// Decide the rendered view for `state` under `auth`.
pub fn resolve_view(state: &RouterState, auth: &AuthSnapshot) -> View {
    let page = state.current_page;
    if auth.auth_loading && state.previous_authenticated.is_none() && !is_public_route(page) {
        return View::Loading;
    }
    if auth.is_role_pending() {
        return View::Loading;
    }
    if is_protected_route(page) && !auth.is_authenticated {
        return View::Substitute(Page::Login);
    }
    if is_auth_route(page) && auth.is_authenticated {
        return View::Substitute(target_for(auth.role));
    }
    View::Page(page)
}

/// Owns `RouterState` and the navigation store; the single writer of both.
#[derive(Clone, Debug)]
pub struct RouterController<H: History> {
    store: NavigationStore<H>,
    previous_authenticated: Option<bool>,
    has_redirected_this_session: bool,
    /// Signed in while a protected page showed the login view in place.
    landing_after_sign_in: bool,
    auth: AuthSnapshot,
}

impl<H: History> RouterController<H> {
    /// Start in bootstrap with the page read from `history`.
    pub fn new(history: H) -> Self {
        Self {
            store: NavigationStore::new(history),
            previous_authenticated: None,
            has_redirected_this_session: false,
            landing_after_sign_in: false,
            auth: AuthSnapshot::default(),
        }
    }

    pub fn state(&self) -> RouterState {
        RouterState {
            current_page: self.store.current_page(),
            previous_authenticated: self.previous_authenticated,
            has_redirected_this_session: self.has_redirected_this_session,
        }
    }

    pub fn current_page(&self) -> Page {
        self.store.current_page()
    }

    /// Last snapshot received from the identity provider.
    pub fn auth(&self) -> &AuthSnapshot {
        &self.auth
    }

    /// Pathname of the active history entry.
    pub fn current_path(&self) -> String {
        self.store.history().current_path()
    }

    pub fn history(&self) -> &H {
        self.store.history()
    }

    pub fn history_mut(&mut self) -> &mut H {
        self.store.history_mut()
    }

    /// Current render decision.
    pub fn view(&self) -> View {
        resolve_view(&self.state(), &self.auth)
    }

    /// Apply one event.
    pub fn dispatch(&mut self, event: RouterEvent) {
        log::debug!("router: {event:?} on {}", self.current_page().slug());
        match event {
            RouterEvent::Auth(snapshot) => self.observe_auth(snapshot),
            RouterEvent::PopState => {
                self.landing_after_sign_in = false;
                self.store.handle_pop_state();
                self.run_guard_after_bootstrap();
            }
            RouterEvent::Navigate(page) => {
                self.landing_after_sign_in = false;
                self.store.navigate_to(page);
                self.run_guard_after_bootstrap();
            }
        }
        log::trace!("router: rendering {:?}", self.view());
    }

    fn observe_auth(&mut self, snapshot: AuthSnapshot) {
        self.auth = snapshot;
        if snapshot.auth_loading {
            return;
        }

        let now = snapshot.is_authenticated;
        match (self.previous_authenticated.replace(now), now) {
            (Some(false), true) => {
                self.has_redirected_this_session = false;
                self.landing_after_sign_in = is_protected_route(self.current_page());
            }
            (Some(true), false) => {
                self.landing_after_sign_in = false;
                if is_protected_route(self.current_page()) {
                    log::info!("router: signed out on {}, leaving for landing", self.current_page().slug());
                    self.store.navigate_to(Page::Landing);
                }
                self.has_redirected_this_session = false;
            }
            _ => {}
        }

        self.apply_redirect_guard();
    }

    fn run_guard_after_bootstrap(&mut self) {
        if self.previous_authenticated.is_some() {
            self.apply_redirect_guard();
        }
    }

    fn apply_redirect_guard(&mut self) {
        if !self.auth.is_role_ready() || self.has_redirected_this_session {
            return;
        }
        let page = self.current_page();
        let role = self.auth.role;
        let target = target_for(role);
        let after_sign_in = std::mem::take(&mut self.landing_after_sign_in) && target != page;
        let staff_on_dashboard = page == Page::Dashboard && role != Some(Role::User);
        if !is_auth_route(page) && !staff_on_dashboard && !after_sign_in {
            return;
        }

        log::info!(
            "router: redirecting {} -> {} for role {}",
            page.slug(),
            target.slug(),
            role.map_or("unknown", Role::as_str)
        );
        self.has_redirected_this_session = true;
        self.store.navigate_to(target);
    }
}
