//! Browser session history backed by `window.history` and `window.location`.
//!
//! Requires a browser environment. Without the `hydrate` feature the path reads
//! as `/` and writes fail with [`BrowserError::NoWindow`].

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::state::navigation::History;

/// Failures from browser APIs the router writes through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("no browser window available")]
    NoWindow,
    #[error("history api error: {0}")]
    History(String),
}

/// The page's real history stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            "/".to_owned()
        }
    }

    fn push(&mut self, path: &str) -> Result<(), BrowserError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
            let history = window
                .history()
                .map_err(|e| BrowserError::History(format!("{e:?}")))?;
            history
                .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
                .map_err(|e| BrowserError::History(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(BrowserError::NoWindow)
        }
    }
}
