//! Item Manager Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod form_state;
mod list_state;
mod models;
mod request_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
