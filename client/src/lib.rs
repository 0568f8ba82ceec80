//! # client
//!
//! Leptos + WASM frontend for the ACI content-review and newsletter dashboard.
//!
//! The crate renders server-owned state fetched from the REST backend: the
//! article review queue and its approval gates, publishing channels, newsletter
//! configurations and content assembly, and user roles. It never owns a
//! workflow; every mutation is a request followed by a refetch.
//!
//! ARCHITECTURE
//! ============
//! - `net` performs HTTP calls and normalizes response envelopes.
//! - `state` holds plain view-state machines and the query cache.
//! - `components` and `pages` render those states.
//! - `util` isolates browser storage, OAuth URL assembly and formatting.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
