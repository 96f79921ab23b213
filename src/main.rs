//! Client Portal Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod format;
mod listings;
mod logging;
mod markdown;
mod message_store;
mod mock_data;
mod models;
mod pages;
mod pipeline;
mod routes;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Default level until the configuration is decoded
    logging::init(log::LevelFilter::Info);
    let config = AppConfig::embedded();
    log::set_max_level(config.log_level.to_filter());
    log::info!("{} starting", config.app_name);
    mount_to_body(App);
}
