//! Bidirectional mapping between URL paths and page identifiers.
//!
//! DESIGN
//! ======
//! Single-segment routes match exactly; hierarchical routes (`/admin/...`,
//! `/partner/...`) match by prefix and collapse onto one page, so
//! `page_for_path(path_for_page(p))` is stable but `path_for_page` does not
//! recover the original sub-path. Unknown paths fall back to `Landing`.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Default admin section when the path carries no sub-route.
pub const DEFAULT_ADMIN_SECTION: &str = "overview";

/// Every client-side view the app can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Landing,
    Login,
    Register,
    Dashboard,
    Terms,
    Privacy,
    ForgotPassword,
    CardOnly,
    Verify,
    Admin,
    Translator,
    Partner,
    Support,
}

impl Page {
    /// All pages, in declaration order.
    pub const ALL: [Page; 13] = [
        Page::Landing,
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::Terms,
        Page::Privacy,
        Page::ForgotPassword,
        Page::CardOnly,
        Page::Verify,
        Page::Admin,
        Page::Translator,
        Page::Partner,
        Page::Support,
    ];

    /// Stable lowercase identifier used in logs and CSS class names.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::Terms => "terms",
            Page::Privacy => "privacy",
            Page::ForgotPassword => "forgot-password",
            Page::CardOnly => "card-only",
            Page::Verify => "verify",
            Page::Admin => "admin",
            Page::Translator => "translator",
            Page::Partner => "partner",
            Page::Support => "support",
        }
    }

    /// Human-readable heading for the page.
    pub fn title(self) -> &'static str {
        match self {
            Page::Landing => "Welcome",
            Page::Login => "Sign In",
            Page::Register => "Create Account",
            Page::Dashboard => "Dashboard",
            Page::Terms => "Terms of Service",
            Page::Privacy => "Privacy Policy",
            Page::ForgotPassword => "Reset Password",
            Page::CardOnly => "Card",
            Page::Verify => "Verify",
            Page::Admin => "Administration",
            Page::Translator => "Translator Workspace",
            Page::Partner => "Partner Portal",
            Page::Support => "Support Desk",
        }
    }
}

/// Resolve a location pathname to the page that renders it.
pub fn page_for_path(path: &str) -> Page {
    match path {
        "/login" => Page::Login,
        "/register" => Page::Register,
        "/dashboard" => Page::Dashboard,
        "/terms" => Page::Terms,
        "/privacy" => Page::Privacy,
        "/forgot-password" => Page::ForgotPassword,
        "/card-only" => Page::CardOnly,
        "/verify" => Page::Verify,
        p if p.starts_with("/verify?") => Page::Verify,
        p if p.starts_with("/admin") => Page::Admin,
        p if p.starts_with("/translator") => Page::Translator,
        p if p.starts_with("/partner") => Page::Partner,
        p if p.starts_with("/support") => Page::Support,
        _ => Page::Landing,
    }
}

/// Canonical path for a page.
pub fn path_for_page(page: Page) -> &'static str {
    match page {
        Page::Landing => "/",
        Page::Login => "/login",
        Page::Register => "/register",
        Page::Dashboard => "/dashboard",
        Page::Terms => "/terms",
        Page::Privacy => "/privacy",
        Page::ForgotPassword => "/forgot-password",
        Page::CardOnly => "/card-only",
        Page::Verify => "/verify",
        Page::Admin => "/admin",
        Page::Translator => "/translator",
        Page::Partner => "/partner",
        Page::Support => "/support",
    }
}

/// Admin sub-route segment following `/admin/`, e.g. `users` for `/admin/users/42`.
///
/// Equivalent to the pattern `^/admin/?(\w*)` with ASCII word characters.
/// Returns [`DEFAULT_ADMIN_SECTION`] when the segment is empty or the path is
/// not an admin path.
pub fn admin_sub_page(path: &str) -> &str {
    let Some(rest) = path.strip_prefix("/admin") else {
        return DEFAULT_ADMIN_SECTION;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    match &rest[..end] {
        "" => DEFAULT_ADMIN_SECTION,
        section => section,
    }
}
