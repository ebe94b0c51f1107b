//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and URL construction, `types` defines the
//! shared wire schema for detection records.

pub mod api;
pub mod types;
