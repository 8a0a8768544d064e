//! # portal
//!
//! Leptos + WASM frontend shell for the translation portal.
//!
//! The heart of this crate is the navigation and authorization state machine
//! in `state::router`: it reconciles the URL, the identity provider's auth
//! snapshots and the deferred role lookup into one rendered view, redirecting
//! at most once per sign-in or sign-out. `routes` holds the pure route tables
//! it consults; `app` wires it to the browser.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let loaded = config::AppConfig::load();
    let level = loaded.as_ref().map_or(config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    let _ = console_log::init_with_level(level);
    let config = loaded.unwrap_or_else(|e| {
        log::warn!("config: {e}; using defaults");
        config::AppConfig::default()
    });

    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
