//! Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod route;
mod session;
mod state;
mod workflow;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // Only fails if a logger is already installed
    let _ = rolling_logger::init(LoggerConfig {
        level,
        ..LoggerConfig::default()
    });
    mount_to_body(App);
}
