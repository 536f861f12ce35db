//! Project Hub Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod filters;
mod loader;
mod location;
mod logger;
mod models;
mod registration;
mod stats;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    logger::init(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
