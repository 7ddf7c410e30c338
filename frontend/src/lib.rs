#![recursion_limit = "256"]

//! Browser entry point: hydrates the server-rendered dashboard.

use app::components::App;
use leptos::mount::hydrate_body;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only fails because a logger is already installed.
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Hydrating EV charging dashboard");

    hydrate_body(App);
}
