//! Root application component: router wiring and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app owns one `RouterController` in a signal. Snapshots from the
//! identity adapter, browser popstate events and page navigation requests are
//! all funnelled into `RouterController::dispatch`; components read the
//! resulting state through memos provided as context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::config::AppConfig;
use crate::pages::{content::PageView, loading::LoadingView};
use crate::routes::Page;
use crate::state::auth::AuthSnapshot;
use crate::state::router::{RouterController, RouterEvent, RouterState, View};
use crate::util::history::BrowserHistory;

/// Router bound to the page's real history.
pub type BrowserRouter = RouterController<BrowserHistory>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=AppConfig::default()/>
            </body>
        </html>
    }
}

/// Browser tab title for the rendered view.
pub fn document_title(shown: View, suffix: &str) -> String {
    match shown.page() {
        Some(page) => format!("{} · {suffix}", page.title()),
        None => format!("Loading… · {suffix}"),
    }
}

/// Root application component.
///
/// Provides `RwSignal<AuthSnapshot>`, `Memo<RouterState>` and the
/// `Callback<Page>` navigate handle to every page.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthSnapshot::default());
    let router = RwSignal::new(BrowserRouter::new(BrowserHistory));
    let state: Memo<RouterState> = Memo::new(move |_| router.with(BrowserRouter::state));
    let shown = Memo::new(move |_| router.with(BrowserRouter::view));
    let path = Memo::new(move |_| router.with(BrowserRouter::current_path));
    let navigate = Callback::new(move |page: Page| {
        router.update(|r| r.dispatch(RouterEvent::Navigate(page)));
    });

    provide_context(auth);
    provide_context(state);
    provide_context(navigate);

    Effect::new(move || {
        let snapshot = auth.get();
        router.update(|r| r.dispatch(RouterEvent::Auth(snapshot)));
    });

    #[cfg(feature = "hydrate")]
    {
        let popstate = window_event_listener(leptos::ev::popstate, move |_| {
            router.update(|r| r.dispatch(RouterEvent::PopState));
        });
        on_cleanup(move || popstate.remove());
    }

    crate::net::session::install(auth);

    let suffix = config.title_suffix;

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text=move || document_title(shown.get(), &suffix)/>

        {move || match shown.get() {
            View::Loading => view! { <LoadingView/> }.into_any(),
            View::Page(page) | View::Substitute(page) => {
                view! { <PageView page=page path=path navigate=navigate/> }.into_any()
            }
        }}
    }
}
