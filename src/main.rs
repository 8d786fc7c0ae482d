//! Blog Article Page Entry Point

mod action;
mod api;
mod bootstrap;
mod components;
mod config;
mod controller;
mod csrf;
mod delete_target;
mod dom;
mod error;
mod inflight;
mod likes;
mod models;
mod password;
mod share;
mod truncate;
mod view;

use config::PageConfig;

fn main() {
    console_error_panic_hook::set_once();
    // Everything is let through until the page config sets the real level
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(doc) = window.document() else {
        log::error!("[page] no document");
        return;
    };

    let config = PageConfig::load(&doc);
    log::set_max_level(config.log_level().to_level_filter());

    if let Err(e) = controller::bind(&window, &doc, &config) {
        log::error!("[page] failed to bind article interactions: {}", e);
    }
    truncate::bind_truncators(&doc, &config);
    if let Err(e) = password::bind_password_toggle(&doc, &config) {
        log::error!("[password] failed to bind toggle: {}", e);
    }
    if let Err(e) = share::bind_share_button(&window, &doc, &config) {
        log::error!("[share] failed to bind share button: {}", e);
    }
}
