//! Add Dialog Component
//!
//! Name-entry dialog opened from the tree's add affordances. Confirming
//! performs no structural mutation: the entered name is logged and the
//! dialog closes again.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AddDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());

    let close = move || {
        set_name.set(String::new());
        ctx.close_add_dialog();
    };

    let on_add = move |_| {
        let parent = ctx.add_dialog_parent.get().unwrap_or_default();
        web_sys::console::log_1(
            &format!("[DIALOG] add '{}' under {} (not committed)", name.get(), parent).into(),
        );
        close();
    };

    view! {
        <Show when=move || ctx.add_dialog_parent.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Adding..."</h2>
                    <p>"Enter name:"</p>
                    <input
                        type="text"
                        placeholder="Name"
                        autofocus
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <div class="dialog-actions">
                        <button type="button" on:click=move |_| close()>"Cancel"</button>
                        <button type="button" on:click=on_add>"Add"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
