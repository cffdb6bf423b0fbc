//! # admin-shell
//!
//! Leptos + WASM chrome for the administration area: a collapsible sidebar
//! navigation panel and a top navigation bar.
//!
//! `menu` holds the static navigation definition, `state` the sidebar's
//! selection/expansion/collapse state machine, `util` the pure style rules
//! and theme glue, and `components` the views that tie them together.

pub mod app;
pub mod components;
pub mod config;
pub mod menu;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(|| view! { <App/> });
}
