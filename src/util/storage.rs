//! Browser `localStorage` reads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Settings that developers flip from the devtools console (log level) live in
//! `localStorage`. SSR and native builds read nothing.

/// Read the raw string stored under `key`.
pub fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
