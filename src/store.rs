//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The node tree
//! lives here (one authoritative tree shared by every presentation
//! refresh) together with the row sequence and the checked/expanded sets.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Row, RowPatch, UpdateAction};
use crate::rows::RowStore;
use crate::tree::NodeTree;

/// Number of rows the grid is seeded with.
pub const INITIAL_ROW_COUNT: usize = 2;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Editable row sequence backing the data grid
    pub rows: RowStore,
    /// Schema hierarchy backing the checkbox tree
    pub tree: NodeTree,
    /// Checked node keys (view state, never holds affordance keys)
    pub checked: BTreeSet<String>,
    /// Expanded node keys (view state)
    pub expanded: BTreeSet<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rows: RowStore::seeded(INITIAL_ROW_COUNT),
            tree: NodeTree::seeded(),
            checked: BTreeSet::new(),
            expanded: BTreeSet::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Merge a patch over the update range selected by `action`
pub fn store_apply_range_update(
    store: &AppStore,
    from: usize,
    to: usize,
    patch: &RowPatch,
    action: UpdateAction,
) {
    store.rows().write().apply_range_update(from, to, patch, action);
}

/// Append one generated row (the Add Row button)
pub fn store_append_row(store: &AppStore) {
    store.rows().write().append_row();
}

/// Append a loaded batch (scroll loading)
pub fn store_extend_rows(store: &AppStore, batch: Vec<Row>) {
    store.rows().write().extend(batch);
}

/// Delete a node by key, cascading, keeping the checked set in sync
pub fn store_delete_node(store: &AppStore, key: &str) {
    // The tree mutation and the checked-set cleanup touch two store fields,
    // so the set is cloned out and written back to keep one guard at a time.
    let mut checked = store.checked().get();
    store.tree().write().delete(key, &mut checked);
    store.checked().set(checked);
}

/// Replace the checked set (check event from the tree widget)
pub fn store_set_checked(store: &AppStore, checked: BTreeSet<String>) {
    store.checked().set(checked);
}

/// Replace the expanded set (expand event from the tree widget)
pub fn store_set_expanded(store: &AppStore, expanded: BTreeSet<String>) {
    store.expanded().set(expanded);
}
