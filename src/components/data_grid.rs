//! Data Grid Component
//!
//! Thin editable grid over the row store: column headers from the
//! `COLUMNS` contract, a select column, double-click cell editing,
//! Ctrl+C/Ctrl+V cell paste, and scroll-triggered batch loading. All row
//! mutation goes through the store helpers; the grid itself keeps only
//! view state (selection, focus, the cell being edited).

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::fakedata;
use crate::models::{RowPatch, UpdateAction, COLUMNS};
use crate::store::{store_apply_range_update, store_extend_rows, use_app_store, AppStateStoreFields};

/// Rows appended per scroll-triggered load.
const SCROLL_BATCH_SIZE: usize = 50;

#[component]
pub fn DataGrid() -> impl IntoView {
    let store = use_app_store();

    let (selected_rows, set_selected_rows) = signal(BTreeSet::<String>::new());
    let (editing, set_editing) = signal::<Option<(usize, &'static str)>>(None);
    let (focused, set_focused) = signal::<Option<(usize, &'static str)>>(None);
    let (copied, set_copied) = signal::<Option<(usize, &'static str)>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let commit_edit = move |index: usize, key: &'static str, value: String| {
        store_apply_range_update(
            &store,
            index,
            index,
            &RowPatch::single(key, value),
            UpdateAction::CellUpdate,
        );
        set_editing.set(None);
    };

    // Bottom-of-scroll batch load. No in-flight guard: overlapping loads
    // each append their own batch.
    let on_scroll = move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if target.client_height() + target.scroll_top() < target.scroll_height() {
            return;
        }
        let length = store.rows().read_untracked().len();
        set_is_loading.set(true);
        spawn_local(async move {
            let batch = fakedata::load_more_rows(SCROLL_BATCH_SIZE, length).await;
            web_sys::console::log_1(&format!("[GRID] loaded {} more rows", batch.len()).into());
            store_extend_rows(&store, batch);
            set_is_loading.set(false);
        });
    };

    // Ctrl+C copies the focused cell, Ctrl+V pastes it onto the focused
    // row. Paste targets only the destination row, whatever the source.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if !ev.ctrl_key() {
            return;
        }
        match ev.key().as_str() {
            "c" => set_copied.set(focused.get_untracked()),
            "v" => {
                let (Some((src, key)), Some((dst, _))) =
                    (copied.get_untracked(), focused.get_untracked())
                else {
                    return;
                };
                let Some(value) = store
                    .rows()
                    .read_untracked()
                    .rows()
                    .get(src)
                    .map(|r| r.field(key).to_string())
                else {
                    return;
                };
                store_apply_range_update(
                    &store,
                    src,
                    dst,
                    &RowPatch::single(key, value),
                    UpdateAction::CopyPaste,
                );
            }
            _ => {}
        }
    };

    let rows = move || {
        store
            .rows()
            .read()
            .rows()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="data-grid" tabindex="0" on:scroll=on_scroll on:keydown=on_keydown>
            <div class="grid-header">
                <div class="grid-cell select-cell"></div>
                {COLUMNS.iter().map(|col| {
                    let mut class = String::from("grid-cell header-cell");
                    if col.frozen { class.push_str(" frozen"); }
                    if col.resizable { class.push_str(" resizable"); }
                    view! {
                        <div class=class style=format!("width: {}px", col.width)>
                            {col.name}
                        </div>
                    }
                }).collect_view()}
            </div>

            // Keyed on a hash of the row value so in-place edits re-render
            <For
                each=rows
                key=|(index, row)| (*index, row.cache_key())
                children=move |(index, row)| {
                    let id = row.id.clone();
                    let row_class = if id.contains('7') { "grid-row highlight" } else { "grid-row" };

                    let id_for_selected = id.clone();
                    let is_selected = move || selected_rows.read().contains(&id_for_selected);
                    let id_for_toggle = id.clone();
                    let on_select = move |_| {
                        set_selected_rows.update(|selected| {
                            if !selected.remove(&id_for_toggle) {
                                selected.insert(id_for_toggle.clone());
                            }
                        });
                    };

                    view! {
                        <div class=row_class>
                            <div class="grid-cell select-cell">
                                <input type="checkbox" prop:checked=is_selected on:change=on_select />
                            </div>
                            {COLUMNS.iter().map(|col| {
                                let key = col.key;
                                let cell_value = row.field(key).to_string();
                                let mut class = String::from("grid-cell");
                                if col.frozen { class.push_str(" frozen"); }
                                if col.editable { class.push_str(" editable"); }

                                let is_editing = move || editing.get() == Some((index, key));
                                let on_click = move |_| set_focused.set(Some((index, key)));
                                let editable = col.editable;
                                let on_dblclick = move |_| {
                                    if editable {
                                        set_editing.set(Some((index, key)));
                                    }
                                };

                                let edit_value = cell_value;
                                let cell_body = move || -> AnyView {
                                    if is_editing() {
                                        let initial = edit_value.clone();
                                        view! {
                                            <input
                                                type="text"
                                                class="cell-editor"
                                                autofocus
                                                prop:value=initial
                                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                    match ev.key().as_str() {
                                                        "Enter" => commit_edit(index, key, event_target_value(&ev)),
                                                        "Escape" => set_editing.set(None),
                                                        _ => {}
                                                    }
                                                }
                                                on:blur=move |ev| {
                                                    if editing.get_untracked() == Some((index, key)) {
                                                        commit_edit(index, key, event_target_value(&ev));
                                                    }
                                                }
                                            />
                                        }
                                        .into_any()
                                    } else if key == "avatar" {
                                        view! { <img class="avatar" src=edit_value.clone() /> }.into_any()
                                    } else {
                                        view! { <span>{edit_value.clone()}</span> }.into_any()
                                    }
                                };

                                view! {
                                    <div
                                        class=class
                                        style=format!("width: {}px", col.width)
                                        on:click=on_click
                                        on:dblclick=on_dblclick
                                    >
                                        {cell_body}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                }
            />
        </div>
        {move || is_loading.get().then(|| view! {
            <div class="load-more-rows-tag">"Loading more rows..."</div>
        })}
    }
}
