pub mod api;
pub mod commands;
pub mod components;
pub mod config;
pub mod state;

use leptos::prelude::*;
use components::app::App;
use spectrum_core::ViewerConfig;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (ViewerConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.log_level());
    if let Some(e) = config_error {
        log::warn!("{e}; using default settings");
    }

    mount_to_body(move || view! { <App config=config /> });
}
