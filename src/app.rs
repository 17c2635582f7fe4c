//! Schema Grid App
//!
//! Layout shell: checkbox tree over the mock schema on the left, the
//! editable data grid on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddDialog, CheckboxTree, DataGrid, Toolbar};
use crate::context::AppContext;
use crate::store::{store_delete_node, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let add_dialog_parent = signal::<Option<String>>(None);
    provide_context(AppContext::new(add_dialog_parent));

    let on_delete = move |_| {
        // Snapshot first: every deletion shrinks the checked set as it goes.
        let keys: Vec<String> = store.checked().get_untracked().into_iter().collect();
        for key in keys {
            store_delete_node(&store, &key);
        }
    };

    view! {
        <SplitPane
            left=move || view! {
                <button type="button" class="delete-btn" on:click=on_delete>"Delete"</button>
                <AddDialog />
                <CheckboxTree />
            }
            right=move || view! {
                <div class="all-features">
                    <Toolbar />
                    <DataGrid />
                </div>
            }
        />
    }
}

/// Two-pane layout wrapper
#[component]
pub fn SplitPane(#[prop(into)] left: ViewFn, #[prop(into)] right: ViewFn) -> impl IntoView {
    view! {
        <div class="split-pane">
            <div class="split-pane-left">{left.run()}</div>
            <div class="split-pane-right">{right.run()}</div>
        </div>
    }
}
