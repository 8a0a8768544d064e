//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The router decides which page is shown; these components only render it.
//! Page content itself belongs to feature crates, so each page here is a
//! frame with navigation that requests page changes through the router.

pub mod content;
pub mod loading;
