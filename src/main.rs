//! Grüne Oase Frontend Entry Point

mod models;
mod content;
mod filter;
mod route;
mod context;
mod markdown;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
