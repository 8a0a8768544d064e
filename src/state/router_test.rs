use super::*;
use crate::state::navigation::MemoryHistory;

fn controller_at(path: &str) -> RouterController<MemoryHistory> {
    RouterController::new(MemoryHistory::new(path))
}

fn pushes(router: &RouterController<MemoryHistory>) -> usize {
    router.history().push_count()
}

fn auth(router: &mut RouterController<MemoryHistory>, snapshot: AuthSnapshot) {
    router.dispatch(RouterEvent::Auth(snapshot));
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn new_controller_is_bootstrapping() {
    let router = controller_at("/admin/users");
    let state = router.state();
    assert_eq!(state.current_page, Page::Admin);
    assert_eq!(state.previous_authenticated, None);
    assert!(!state.has_redirected_this_session);
}

#[test]
fn loading_snapshots_do_not_end_bootstrap() {
    let mut router = controller_at("/dashboard");
    auth(&mut router, AuthSnapshot::loading());
    auth(&mut router, AuthSnapshot::loading());
    assert_eq!(router.state().previous_authenticated, None);
    assert_eq!(router.view(), View::Loading);
}

#[test]
fn protected_page_shows_loading_while_auth_loads() {
    for path in ["/dashboard", "/admin", "/support/tickets"] {
        let mut router = controller_at(path);
        auth(&mut router, AuthSnapshot::loading());
        assert_eq!(router.view(), View::Loading, "path {path}");
    }
}

#[test]
fn auth_page_shows_loading_while_auth_loads() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::loading());
    assert_eq!(router.view(), View::Loading);
}

#[test]
fn public_pages_render_while_auth_loads() {
    for page in [Page::Landing, Page::Terms, Page::Privacy, Page::Verify] {
        let mut router = controller_at(crate::routes::path_for_page(page));
        auth(&mut router, AuthSnapshot::loading());
        assert_eq!(router.view(), View::Page(page));
    }
}

#[test]
fn first_observation_runs_guard_on_login() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::loading());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Superadmin)));
    assert_eq!(router.state().previous_authenticated, Some(true));
    assert_eq!(router.current_page(), Page::Admin);
    assert_eq!(pushes(&router), 1);
    assert!(router.state().has_redirected_this_session);
}

#[test]
fn first_observation_sends_staff_off_dashboard() {
    let mut router = controller_at("/dashboard");
    auth(&mut router, AuthSnapshot::loading());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Partner)));
    assert_eq!(router.current_page(), Page::Partner);
    assert_eq!(pushes(&router), 1);
}

#[test]
fn resolved_snapshot_delivered_twice_matches_once() {
    for path in ["/login", "/dashboard", "/register", "/translator", "/terms"] {
        let outcome = |deliveries: usize| {
            let mut router = controller_at(path);
            auth(&mut router, AuthSnapshot::loading());
            for _ in 0..deliveries {
                auth(&mut router, AuthSnapshot::signed_in(Some(Role::Superadmin)));
            }
            (router.current_page(), pushes(&router))
        };
        assert_eq!(outcome(1), outcome(2), "path {path}");
    }
}

#[test]
fn deep_linked_staff_page_is_kept_on_load() {
    let mut router = controller_at("/translator/jobs");
    auth(&mut router, AuthSnapshot::loading());
    auth(&mut router, AuthSnapshot::role_pending(None));
    assert_eq!(router.view(), View::Loading);
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Translator)));
    assert_eq!(router.view(), View::Page(Page::Translator));
    assert_eq!(pushes(&router), 0);
}

#[test]
fn signed_in_user_visiting_login_is_redirected_once_role_resolves() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::loading());
    auth(&mut router, AuthSnapshot::role_pending(None));
    assert_eq!(router.view(), View::Loading);
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Support)));
    assert_eq!(router.current_page(), Page::Support);
    assert_eq!(router.history().current_path(), "/support");
    assert!(router.state().has_redirected_this_session);
}

// =============================================================
// Fresh login
// =============================================================

#[test]
fn fresh_login_waits_for_role_then_redirects_once() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::signed_out());
    assert_eq!(router.view(), View::Page(Page::Login));

    auth(&mut router, AuthSnapshot::role_pending(Some(Role::Partner)));
    assert_eq!(router.view(), View::Loading);
    assert_eq!(router.current_page(), Page::Login);
    assert_eq!(pushes(&router), 0);

    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Partner)));
    assert_eq!(router.current_page(), Page::Partner);
    assert_eq!(router.view(), View::Page(Page::Partner));
    assert_eq!(pushes(&router), 1);
}

#[test]
fn login_flip_resets_guard() {
    let mut router = controller_at("/register");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::role_pending(None));
    assert!(!router.state().has_redirected_this_session);
    assert_eq!(router.state().previous_authenticated, Some(true));
}

#[test]
fn user_role_on_forgot_password_goes_to_dashboard() {
    let mut router = controller_at("/forgot-password");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::User)));
    assert_eq!(router.current_page(), Page::Dashboard);
    assert_eq!(pushes(&router), 1);
}

#[test]
fn unknown_role_on_login_goes_to_dashboard() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Role::from_claim("owner")));
    assert_eq!(router.current_page(), Page::Dashboard);
}

// =============================================================
// Redirect guard
// =============================================================

#[test]
fn repeated_snapshots_after_redirect_do_not_navigate_again() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Superadmin)));
    assert_eq!(pushes(&router), 1);

    for _ in 0..5 {
        auth(&mut router, AuthSnapshot::signed_in(Some(Role::Superadmin)));
    }
    assert_eq!(pushes(&router), 1);
    assert_eq!(router.current_page(), Page::Admin);
}

#[test]
fn guard_blocks_second_redirect_when_returning_to_login() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Partner)));
    router.dispatch(RouterEvent::Navigate(Page::Login));
    assert_eq!(router.current_page(), Page::Login);
    assert_eq!(router.view(), View::Substitute(Page::Partner));
    assert_eq!(pushes(&router), 2);
}

#[test]
fn staff_role_on_dashboard_is_redirected() {
    let mut router = controller_at("/dashboard");
    auth(&mut router, AuthSnapshot::signed_out());
    assert_eq!(router.view(), View::Substitute(Page::Login));
    auth(&mut router, AuthSnapshot::role_pending(None));
    assert_eq!(pushes(&router), 0);
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Translator)));
    assert_eq!(router.current_page(), Page::Translator);
    assert_eq!(pushes(&router), 1);
}

#[test]
fn user_role_on_dashboard_stays_and_keeps_guard_open() {
    let mut router = controller_at("/dashboard");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::User)));
    assert_eq!(router.current_page(), Page::Dashboard);
    assert!(!router.state().has_redirected_this_session);
    assert_eq!(pushes(&router), 0);
}

#[test]
fn guard_fires_later_when_page_changes_to_auth_route() {
    let mut router = controller_at("/terms");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Support)));
    assert_eq!(router.current_page(), Page::Terms);
    assert!(!router.state().has_redirected_this_session);

    router.dispatch(RouterEvent::Navigate(Page::Login));
    assert_eq!(router.current_page(), Page::Support);
    assert!(router.state().has_redirected_this_session);
}

#[test]
fn navigate_during_bootstrap_skips_guard() {
    let mut router = controller_at("/");
    auth(&mut router, AuthSnapshot::loading());
    router.dispatch(RouterEvent::Navigate(Page::Login));
    assert_eq!(router.current_page(), Page::Login);
    assert_eq!(router.view(), View::Loading);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_on_protected_page_navigates_to_landing_once() {
    let mut router = controller_at("/admin");
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Superadmin)));
    auth(&mut router, AuthSnapshot::signed_out());
    assert_eq!(router.current_page(), Page::Landing);
    assert_eq!(router.history().current_path(), "/");
    assert_eq!(pushes(&router), 1);

    auth(&mut router, AuthSnapshot::signed_out());
    assert_eq!(pushes(&router), 1);
}

#[test]
fn logout_on_public_page_stays() {
    let mut router = controller_at("/privacy");
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::User)));
    auth(&mut router, AuthSnapshot::signed_out());
    assert_eq!(router.current_page(), Page::Privacy);
    assert_eq!(pushes(&router), 0);
}

#[test]
fn logout_resets_guard_for_next_login() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Partner)));
    assert!(router.state().has_redirected_this_session);

    auth(&mut router, AuthSnapshot::signed_out());
    assert!(!router.state().has_redirected_this_session);
    assert_eq!(router.current_page(), Page::Landing);

    router.dispatch(RouterEvent::Navigate(Page::Login));
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Support)));
    assert_eq!(router.current_page(), Page::Support);
}

// =============================================================
// Deep link while signed out
// =============================================================

#[test]
fn protected_deep_link_renders_login_in_place() {
    let mut router = controller_at("/support");
    auth(&mut router, AuthSnapshot::loading());
    auth(&mut router, AuthSnapshot::signed_out());
    assert_eq!(router.view(), View::Substitute(Page::Login));
    assert_eq!(router.current_page(), Page::Support);
    assert_eq!(router.history().current_path(), "/support");
    assert_eq!(pushes(&router), 0);
}

#[test]
fn login_after_protected_deep_link_lands_on_role_target() {
    let mut router = controller_at("/support");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::role_pending(None));
    assert_eq!(router.current_page(), Page::Support);
    assert_eq!(router.history().current_path(), "/support");
    assert_eq!(router.view(), View::Loading);
    assert_eq!(pushes(&router), 0);

    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Partner)));
    assert_eq!(router.current_page(), Page::Partner);
    assert_eq!(router.history().entries(), ["/support", "/partner"]);
    assert_eq!(pushes(&router), 1);
    assert!(router.state().has_redirected_this_session);
}

#[test]
fn login_after_protected_deep_link_as_user_lands_on_dashboard() {
    let mut router = controller_at("/admin/users");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::User)));
    assert_eq!(router.current_page(), Page::Dashboard);
    assert_eq!(router.view(), View::Page(Page::Dashboard));
    assert_eq!(pushes(&router), 1);
}

#[test]
fn login_on_deep_linked_role_target_stays_put() {
    let mut router = controller_at("/translator");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Translator)));
    assert_eq!(router.current_page(), Page::Translator);
    assert_eq!(pushes(&router), 0);
    assert!(!router.state().has_redirected_this_session);
}

#[test]
fn navigating_away_before_role_resolves_drops_sign_in_landing() {
    let mut router = controller_at("/support");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::role_pending(None));
    router.dispatch(RouterEvent::Navigate(Page::Terms));
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Partner)));
    assert_eq!(router.current_page(), Page::Terms);
    assert_eq!(pushes(&router), 1);
}

// =============================================================
// PopState
// =============================================================

#[test]
fn pop_state_restores_previous_page_without_pushing() {
    let mut router = controller_at("/");
    auth(&mut router, AuthSnapshot::signed_out());
    router.dispatch(RouterEvent::Navigate(Page::Terms));
    router.dispatch(RouterEvent::Navigate(Page::Privacy));
    assert_eq!(pushes(&router), 2);

    assert!(router.history_mut().back());
    router.dispatch(RouterEvent::PopState);
    assert_eq!(router.current_page(), Page::Terms);
    assert_eq!(pushes(&router), 2);

    assert!(router.history_mut().forward());
    router.dispatch(RouterEvent::PopState);
    assert_eq!(router.current_page(), Page::Privacy);
    assert_eq!(pushes(&router), 2);
}

#[test]
fn pop_state_back_to_login_while_signed_in_substitutes_target() {
    let mut router = controller_at("/login");
    auth(&mut router, AuthSnapshot::signed_out());
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Translator)));
    assert_eq!(router.current_page(), Page::Translator);

    assert!(router.history_mut().back());
    router.dispatch(RouterEvent::PopState);
    assert_eq!(router.current_page(), Page::Login);
    assert_eq!(router.view(), View::Substitute(Page::Translator));
    assert_eq!(pushes(&router), 1);
}

#[test]
fn pop_state_between_admin_sections_updates_path() {
    let mut router = controller_at("/admin/users");
    auth(&mut router, AuthSnapshot::signed_in(Some(Role::Superadmin)));
    router.history_mut().push("/admin/reports").unwrap();
    router.dispatch(RouterEvent::PopState);
    assert_eq!(router.current_page(), Page::Admin);
    assert_eq!(router.current_path(), "/admin/reports");

    assert!(router.history_mut().back());
    router.dispatch(RouterEvent::PopState);
    assert_eq!(router.current_page(), Page::Admin);
    assert_eq!(router.current_path(), "/admin/users");
}

// =============================================================
// resolve_view
// =============================================================

fn settled(page: Page) -> RouterState {
    RouterState { current_page: page, previous_authenticated: Some(false), has_redirected_this_session: false }
}

#[test]
fn resolve_view_role_pending_gates_every_page() {
    for page in Page::ALL {
        assert_eq!(resolve_view(&settled(page), &AuthSnapshot::role_pending(None)), View::Loading);
    }
}

#[test]
fn resolve_view_card_only_renders_for_anyone() {
    let state = settled(Page::CardOnly);
    assert_eq!(resolve_view(&state, &AuthSnapshot::signed_out()), View::Page(Page::CardOnly));
    assert_eq!(resolve_view(&state, &AuthSnapshot::signed_in(None)), View::Page(Page::CardOnly));
}

#[test]
fn resolve_view_loading_gate_only_applies_during_bootstrap() {
    let mut state = settled(Page::CardOnly);
    assert_eq!(resolve_view(&state, &AuthSnapshot::loading()), View::Page(Page::CardOnly));
    state.previous_authenticated = None;
    assert_eq!(resolve_view(&state, &AuthSnapshot::loading()), View::Loading);
}

#[test]
fn view_page_reports_shown_page() {
    assert_eq!(View::Loading.page(), None);
    assert_eq!(View::Page(Page::Terms).page(), Some(Page::Terms));
    assert_eq!(View::Substitute(Page::Login).page(), Some(Page::Login));
}
