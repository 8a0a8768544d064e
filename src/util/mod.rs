//! Browser glue shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from routing and page
//! logic so the state machine stays testable without a DOM.

pub mod history;
pub mod storage;
