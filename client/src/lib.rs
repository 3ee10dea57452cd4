//! # client
//!
//! Leptos + WASM landing surface for Atrium.
//!
//! This crate contains the landing page and its components, the theme
//! preference controller with its browser ports, the smooth section
//! navigation helper, and the backend endpoint registry.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
