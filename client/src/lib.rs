//! # site-client
//!
//! Leptos + WASM frontend for the company brochure site: marketing pages,
//! certifications gallery, article listing and detail pages, and the
//! consultation-request wizard.
//!
//! Page models live in `state` and carry no Leptos dependency; `pages` and
//! `components` bind them to signals. `net` posts the consultation request to
//! the external API.

pub mod app;
pub mod components;
pub mod content;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating site client");
    leptos::mount::hydrate_body(app::App);
}
