//! # spa-starter
//!
//! Leptos + WASM single-page application starter: a persisted light/dark
//! theme, error boundaries around the app and every route, lazily loaded
//! pages behind a route guard, and a catch-all error page.
//!
//! Page loading is asynchronous but not code-split: all pages ship in one
//! bundle and their factories resolve on the first poll (see [`pages`]).
//!
//! Browser bindings are compiled only with the `csr` feature. Without it the
//! state machines, route entries, and theme resolver build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (config::AppConfig::default(), Some(err)),
    };

    if let Err(err) = console_log::init_with_level(config.log_level) {
        log::warn!("logger already installed: {err}");
    }
    if let Some(err) = config_error {
        log::warn!("invalid build configuration, using defaults: {err}");
    }
    log::info!("starting {}", config.title);

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config/> });
}
