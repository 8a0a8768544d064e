//! Frame for every routed page: header navigation, page body, legal footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links never let the browser follow `href`; they send the target page to the
//! router's navigate callback so history writes stay inside the router.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;

use crate::routes::{Page, admin_sub_page, path_for_page, target_for};
use crate::state::auth::AuthSnapshot;

/// Links shown in every page footer.
pub const FOOTER_LINKS: [Page; 2] = [Page::Terms, Page::Privacy];

/// Header links for the current session.
pub fn header_links(auth: &AuthSnapshot) -> Vec<Page> {
    if auth.is_authenticated {
        vec![Page::Landing, target_for(auth.role)]
    } else {
        vec![Page::Landing, Page::Login, Page::Register]
    }
}

/// One-line description rendered under the page heading.
pub fn summary(page: Page) -> &'static str {
    match page {
        Page::Landing => "Certified translations, delivered online.",
        Page::Login => "Sign in to continue.",
        Page::Register => "Create an account to order translations.",
        Page::Dashboard => "Your orders and documents.",
        Page::Terms => "The terms that govern use of this service.",
        Page::Privacy => "How we handle your personal data.",
        Page::ForgotPassword => "We will email you a reset link.",
        Page::CardOnly => "Your digital card.",
        Page::Verify => "Check the authenticity of a certified document.",
        Page::Admin => "Manage users, orders and settings.",
        Page::Translator => "Assigned translation jobs.",
        Page::Partner => "Referrals and partner orders.",
        Page::Support => "Customer tickets and escalations.",
    }
}

/// Admin section named by `path`, for the admin page only.
pub fn admin_section(page: Page, path: &str) -> Option<&str> {
    (page == Page::Admin).then(|| admin_sub_page(path))
}

#[component]
fn NavLink(page: Page, navigate: Callback<Page>) -> impl IntoView {
    view! {
        <a
            href=path_for_page(page)
            class="nav-link"
            on:click=move |ev| {
                ev.prevent_default();
                navigate.run(page);
            }
        >
            {page.title()}
        </a>
    }
}

/// Render `page` inside the common frame. `path` follows the active history
/// entry, so sub-paths change without re-rendering the frame.
#[component]
pub fn PageView(page: Page, path: Memo<String>, navigate: Callback<Page>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthSnapshot>>();

    let on_sign_out = move |_| crate::net::session::sign_out(auth);

    view! {
        <div class=format!("page page--{}", page.slug())>
            <header class="page__header">
                <nav class="page__nav">
                    {move || {
                        header_links(&auth.get())
                            .into_iter()
                            .map(|link| view! { <NavLink page=link navigate=navigate/> })
                            .collect_view()
                    }}
                </nav>
                <Show when=move || auth.get().is_authenticated>
                    <button class="btn page__sign-out" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </Show>
            </header>
            <main class="page__body">
                <h1>{page.title()}</h1>
                <p class="page__summary">{summary(page)}</p>
                {move || {
                    path.with(|path| admin_section(page, path).map(str::to_owned))
                        .map(|s| view! { <p class="page__section">"Section: " {s}</p> })
                }}
            </main>
            <footer class="page__footer">
                {FOOTER_LINKS.into_iter().map(|link| view! { <NavLink page=link navigate=navigate/> }).collect_view()}
            </footer>
        </div>
    }
}
