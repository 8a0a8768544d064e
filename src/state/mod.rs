//! Client-side state for authentication and navigation.
//!
//! DESIGN
//! ======
//! `auth` models what the identity provider reports, `navigation` owns the
//! history stack, and `router` folds both into a single render decision.

pub mod auth;
pub mod navigation;
pub mod router;
