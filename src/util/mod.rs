//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate timestamp parsing and browser-environment
//! concerns from page and component logic to improve reuse and testability.

pub mod notify;
pub mod sort;
