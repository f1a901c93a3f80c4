//! SR Digital - real estate ad agency landing site
//!
//! A single-page site with scroll-reveal sections and AI-generated ad
//! visuals, built with Leptos and WebAssembly. The server proxies image
//! generation so the API credential never reaches the browser.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
