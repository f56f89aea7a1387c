//! WhatsApp Business Frontend Entry Point

mod app;
mod auth;
mod clipboard;
mod components;
mod config;
mod context;
mod delay;
mod developer;
mod filter;
mod fixtures;
mod flow;
mod models;
mod pages;
mod routes;
mod rules;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(config::LOG_LEVEL);
    mount_to_body(App);
}
