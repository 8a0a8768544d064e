//! Network adapters for services the client consumes.

pub mod session;
