//! # plate-review
//!
//! Leptos + WASM dashboard for reviewing license-plate detections produced
//! by an external recognition pipeline.
//!
//! The client polls a REST backend for the detection list and lets an
//! operator sort, select, edit, delete, bulk-delete, and email records.
//! All state is in-memory and volatile; the backend owns the records and
//! every mutation is confirmed by the server before the local cache is
//! touched.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered
/// document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
