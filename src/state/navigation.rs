//! Current page plus the history entry that backs it.
//!
//! DESIGN
//! ======
//! `NavigationStore` is the only writer of the history stack. `navigate_to`
//! pushes and updates `current_page` in one call, so the address bar and the
//! in-memory page agree once it returns. Back/forward go through
//! `handle_pop_state`, which only reads the entry the browser already moved to.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::routes::{Page, page_for_path, path_for_page};
use crate::util::history::BrowserError;

/// Session history backing the router.
pub trait History {
    /// Pathname of the active entry, without query or fragment.
    fn current_path(&self) -> String;

    /// Append an entry for `path` and make it active, without reloading.
    ///
    /// # Errors
    ///
    /// Returns a [`BrowserError`] when the entry cannot be written.
    fn push(&mut self, path: &str) -> Result<(), BrowserError>;
}

/// In-memory history stack with browser-like back/forward semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    pushes: usize,
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self { entries: vec![initial_path.to_owned()], index: 0, pushes: 0 }
    }

    /// Step back one entry. Returns `false` at the start of the stack.
    ///
    /// Like the browser, this only moves the cursor; the caller delivers the
    /// resulting popstate to the router.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of successful `push` calls.
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        let entry = &self.entries[self.index];
        entry.split(['?', '#']).next().unwrap_or_default().to_owned()
    }

    fn push(&mut self, path: &str) -> Result<(), BrowserError> {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_owned());
        self.index += 1;
        self.pushes += 1;
        Ok(())
    }
}

/// Owns the current page and keeps it in step with `H`.
#[derive(Clone, Debug)]
pub struct NavigationStore<H: History> {
    current_page: Page,
    history: H,
}

impl<H: History> NavigationStore<H> {
    /// Seed the current page from the active history entry.
    pub fn new(history: H) -> Self {
        let current_page = page_for_path(&history.current_path());
        Self { current_page, history }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Show `page`, pushing its canonical path if the address bar differs.
    ///
    /// A failed push is logged; the in-memory page still changes.
    pub fn navigate_to(&mut self, page: Page) {
        let path = path_for_page(page);
        if self.history.current_path() != path {
            if let Err(err) = self.history.push(path) {
                log::warn!("navigate: history push to {path} failed: {err}");
            }
        }
        self.current_page = page;
    }

    /// Re-read the active entry after the browser moved through history.
    pub fn handle_pop_state(&mut self) {
        self.current_page = page_for_path(&self.history.current_path());
    }
}
