//! # client
//!
//! Leptos + WASM frontend for the salary prediction form.
//!
//! This crate contains the page, its components, the page-wide UI state and
//! submission controller, and the HTTP transport for `/predict`. Browser
//! glue is gated behind the `hydrate` feature; everything else runs (and is
//! tested) natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
