//! Checkbox Tree Component
//!
//! Thin recursive rendering of the schema tree: checkboxes for data
//! nodes, expand toggles for parents, and `+` activation for the add
//! affordances. Check/expand/click events go straight to the store and
//! context; no structural rules live here.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Node, NodeIcon, NodeKind};
use crate::store::{store_set_checked, store_set_expanded, use_app_store, AppStateStoreFields};

#[component]
pub fn CheckboxTree() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="checkbox-tree">
            {move || {
                let roots = store.tree().read().roots().to_vec();
                roots
                    .into_iter()
                    .map(|node| node_view(node, "root".to_string(), 0))
                    .collect_view()
            }}
        </div>
    }
}

fn icon_class(icon: NodeIcon) -> &'static str {
    match icon {
        NodeIcon::Database => "node-icon database",
        NodeIcon::Table => "node-icon table",
        NodeIcon::Column => "node-icon column",
        NodeIcon::Plus => "node-icon plus",
    }
}

fn node_view(node: Node, parent_key: String, depth: usize) -> AnyView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let indent = format!("padding-left: {}px", depth * 18);

    match node.kind {
        NodeKind::AddAffordance => {
            let label = node.label;
            view! {
                <div class="tree-node add" style=indent>
                    <button
                        type="button"
                        class="add-leaf"
                        on:click=move |_| {
                            web_sys::console::log_1(
                                &format!("[TREE] add requested under {}", parent_key).into(),
                            );
                            ctx.request_add(&parent_key);
                        }
                    >
                        <span class="node-icon plus"></span>
                        {label}
                    </button>
                </div>
            }
            .into_any()
        }
        NodeKind::Data => {
            let key = node.key.clone();
            let has_children = node.children.is_some();

            let key_for_expand = key.clone();
            let is_expanded = move || store.expanded().read().contains(&key_for_expand);
            let key_for_toggle = key.clone();
            let on_toggle_expand = move |_| {
                let mut expanded = store.expanded().get();
                if !expanded.remove(&key_for_toggle) {
                    expanded.insert(key_for_toggle.clone());
                }
                store_set_expanded(&store, expanded);
            };

            let key_for_checked = key.clone();
            let is_checked = move || store.checked().read().contains(&key_for_checked);
            let key_for_check = key.clone();
            let on_check = move |_| {
                let mut checked = store.checked().get();
                if !checked.remove(&key_for_check) {
                    checked.insert(key_for_check.clone());
                }
                store_set_checked(&store, checked);
            };

            let children = node.children.clone();
            let key_for_children = key.clone();
            let expanded_children = move || {
                if !store.expanded().read().contains(&key_for_children) {
                    return None;
                }
                children.as_ref().map(|kids| {
                    kids.iter()
                        .cloned()
                        .map(|child| node_view(child, key_for_children.clone(), depth + 1))
                        .collect_view()
                })
            };

            let key_for_click = key.clone();
            view! {
                <div class="tree-node" style=indent>
                    {has_children.then(|| view! {
                        <button type="button" class="expand-toggle" on:click=on_toggle_expand>
                            {move || if is_expanded() { "v" } else { ">" }}
                        </button>
                    })}
                    <label on:click=move |_| {
                        web_sys::console::log_1(&format!("[TREE] clicked {}", key_for_click).into());
                    }>
                        <input type="checkbox" prop:checked=is_checked on:change=on_check />
                        <span class=icon_class(node.icon)></span>
                        {node.label.clone()}
                    </label>
                </div>
                {expanded_children}
            }
            .into_any()
        }
    }
}
