//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render individual pieces of the review table while the page
//! owns the state and request orchestration; rows and overlays receive
//! plain values and callbacks.

pub mod plate_detail;
pub mod plate_row;
