//! Role-based landing targets.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use super::path::Page;
use crate::state::auth::Role;

/// Page a signed-in user with `role` should land on.
///
/// `None` covers an unrecognised role claim and resolves to the generic
/// dashboard like `Role::User`.
pub fn target_for(role: Option<Role>) -> Page {
    match role {
        Some(Role::Superadmin) => Page::Admin,
        Some(Role::Translator) => Page::Translator,
        Some(Role::Partner) => Page::Partner,
        Some(Role::Support) => Page::Support,
        Some(Role::User) | None => Page::Dashboard,
    }
}
