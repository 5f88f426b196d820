pub mod app;
pub mod dashboard;
pub mod domain;
pub mod layout;
pub mod reports;
pub mod settings;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = config::init();
    _ = console_log::init_with_level(config::get().log_level());
    console_error_panic_hook::set_once();
    if let Err(e) = loaded {
        log::error!("app-config override ignored: {}", e);
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
