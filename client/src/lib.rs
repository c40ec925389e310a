//! # client
//!
//! Leptos + WASM frontend for the Split Lease policies page.
//!
//! The catalog and the viewer state machine live in the `policies` crate.
//! This crate supplies what they drive: a signal-backed `PolicyView`, the
//! browser `AddressBar`, an HTTP policy source over the server's JSON API,
//! and the page chrome around them (site footer, reservation price
//! breakdown).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
///
/// No `tracing` subscriber is installed, so the policies crate's events
/// reach the browser console through `tracing`'s `log` bridge.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    tracing::debug!("hydrating client");
    leptos::mount::hydrate_body(app::App);
}
