mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::{App, AppContext};
use config::{MOUNT_ELEMENT_ID, ROUTES};
use leptos::prelude::*;
use models::RouteTable;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let table = match RouteTable::new(ROUTES) {
        Ok(table) => table,
        Err(err) => {
            web_sys::console::error_1(&format!("Invalid route table: {}", err).into());
            panic!("invalid route table: {err}");
        }
    };
    let ctx = AppContext::new(table);

    let root = document()
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App ctx=ctx /> }).forget();
}
