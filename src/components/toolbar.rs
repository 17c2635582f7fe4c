//! Grid Toolbar Component
//!
//! Add Row button, row count, and the disconnected GraphQL example
//! trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::graphql;
use crate::store::{store_append_row, use_app_store, AppStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();

    let on_add_row = move |_| store_append_row(&store);

    // Illustrative only: there is no server behind /graphql, so outside a
    // wired-up deployment this logs the failure branch.
    let on_run_query = move |_| {
        spawn_local(async {
            match graphql::fetch_read_node().await {
                Ok(data) => {
                    web_sys::console::log_1(&format!("[GRAPHQL] data returned: {}", data).into())
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[GRAPHQL] request failed: {}", err).into())
                }
            }
        });
    };

    view! {
        <div class="toolbar">
            <div class="tools">
                <button type="button" on:click=on_add_row>"Add Row"</button>
                <button type="button" on:click=on_run_query>"Run GraphQL example"</button>
            </div>
            <span class="row-count">
                {move || format!("{} rows", store.rows().read().len())}
            </span>
        </div>
    }
}
