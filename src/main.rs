//! Folio Frontend Entry Point

mod models;
mod error;
mod catalog;
mod gallery;
mod selection;
mod tasks;
mod navbar;
mod motion;
mod contact;
mod markdown;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    mount_to_body(App);
}
