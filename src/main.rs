//! Stockroom Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod list_view;
mod models;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
