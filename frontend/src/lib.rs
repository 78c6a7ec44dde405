//! Browser entry point for the Cookbook frontend.

use cookbook_app::App;
use cookbook_core::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Mount the application.
///
/// Installs the panic hook and console logger, loads the embedded
/// configuration and mounts [`App`] to `<body>`. An invalid configuration is
/// logged and replaced by the defaults.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(level);

    let config = match AppConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid embedded configuration, using defaults: {e}");
            AppConfig::default()
        }
    };

    log::info!("Mounting {}", config.site.title);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
