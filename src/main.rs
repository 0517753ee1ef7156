//! CivicPulse Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod forms;
mod render;
mod context;
mod store;
mod components;
mod app;

#[cfg(test)]
mod tests;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    if let Some(level) = config.console_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("[APP] CivicPulse starting, API at {}", config.api_base);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
