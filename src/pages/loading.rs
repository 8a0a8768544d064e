//! Placeholder shown while auth or role resolution is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="portal-loading" role="status" aria-busy="true">
            <span class="portal-loading__spinner"></span>
            <span class="portal-loading__label">"Loading…"</span>
        </div>
    }
}
