//! # client
//!
//! Leptos frontend for the Deeple promotional site: a navbar with a
//! copyable contract address and a hero banner that plays a selectable list
//! of promotional videos.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Playback and retry decisions live in the `showcase` crate;
//! this crate owns the components and the `web-sys` glue that carries those
//! decisions out on real media elements.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod site;
pub mod util;

/// WASM entry point. Installs panic and log forwarding to the browser
/// console, then hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
