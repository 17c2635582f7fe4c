//! Schema Grid Frontend Entry Point

mod app;
mod components;
mod context;
mod fakedata;
mod graphql;
mod models;
mod rows;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
