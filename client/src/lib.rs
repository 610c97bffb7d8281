//! # client
//!
//! Leptos + WASM chat widget. A user types a question, the widget posts it to
//! the chat backend and renders the answer with any source links.
//!
//! This crate contains the page shell, the chat panel and toast components,
//! the widget state, and the HTTP helper for the `/chat` endpoint. The
//! `moonchat` server crate renders it with SSR and the browser hydrates it
//! through [`hydrate`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
