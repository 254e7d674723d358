//! # client
//!
//! Leptos + WASM frontend for the Auctora auction marketplace.
//!
//! This crate contains pages, components, client-side state stores, the REST
//! helpers for the remote marketplace API, and small pure utilities (page
//! window, countdown and price formatting, the session profile mirror).

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
