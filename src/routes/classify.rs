//! Access classification for pages.
//!
//! Every predicate matches the full `Page` set without a wildcard arm, so a new
//! page cannot be added without deciding its access class here.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use super::path::Page;

/// Pages that render before authentication is known, with no loading gate.
pub fn is_public_route(page: Page) -> bool {
    match page {
        Page::Landing | Page::Terms | Page::Privacy | Page::Verify => true,
        Page::Login
        | Page::Register
        | Page::Dashboard
        | Page::ForgotPassword
        | Page::CardOnly
        | Page::Admin
        | Page::Translator
        | Page::Partner
        | Page::Support => false,
    }
}

/// Pages that require an authenticated session to show their content.
pub fn is_protected_route(page: Page) -> bool {
    match page {
        Page::Dashboard | Page::Admin | Page::Translator | Page::Partner | Page::Support => true,
        Page::Landing
        | Page::Login
        | Page::Register
        | Page::Terms
        | Page::Privacy
        | Page::ForgotPassword
        | Page::CardOnly
        | Page::Verify => false,
    }
}

/// Pages that only make sense while signed out.
pub fn is_auth_route(page: Page) -> bool {
    match page {
        Page::Login | Page::Register | Page::ForgotPassword => true,
        Page::Landing
        | Page::Dashboard
        | Page::Terms
        | Page::Privacy
        | Page::CardOnly
        | Page::Verify
        | Page::Admin
        | Page::Translator
        | Page::Partner
        | Page::Support => false,
    }
}
