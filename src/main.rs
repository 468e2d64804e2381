//! Todo List Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod reducer;
mod store;

use app::App;
use config::UiConfig;
use leptos::prelude::*;
use log::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match UiConfig::from_document() {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    };
    if let Err(err) = logging::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    if let Some(err) = config_error {
        warn!("ignoring todo-config: {}", err);
    }

    info!("mounting");
    mount_to_body(move || view! { <App config=config /> });
}
