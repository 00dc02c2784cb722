#![allow(warnings)]
//! Activity Modal Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod sequence;
mod category;
mod clock;
mod cookie;
mod favorites;
mod draft;
mod submit;
mod api;
mod dom;
mod store;
mod context;
mod controller;
mod components;
mod app;

use app::App;
use config::ModalConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ModalConfig::load();
    logging::set_verbose(config.verbose_logging);
    logging::debug(&format!("Activity modal loaded, {} categories", config.categories.len()));

    mount_to_body(move || view! { <App config=config.clone() /> });
}
