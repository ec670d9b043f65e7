//! Prepa Guide Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod deck;
mod flow;
mod markdown;
mod models;
mod questions;
mod relay;
mod router;
mod storage;
mod store;
mod timeline;
mod viewport;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    if let Err(e) = rolling_logger::init(config.log_level, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("[APP] starting, analysis at {}", config.analyze_url());
    mount_to_body(move || view! { <App config=config.clone() /> });
}
