//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Parent key the add dialog was opened for (None = closed) - read
    pub add_dialog_parent: ReadSignal<Option<String>>,
    /// Parent key the add dialog was opened for - write
    set_add_dialog_parent: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(add_dialog_parent: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            add_dialog_parent: add_dialog_parent.0,
            set_add_dialog_parent: add_dialog_parent.1,
        }
    }

    /// Open the add dialog for a parent node ("root" for the top level).
    ///
    /// Confirming the dialog performs no structural mutation; the dialog
    /// only closes again. This seam is where a real insert would commit.
    pub fn request_add(&self, parent_key: &str) {
        self.set_add_dialog_parent.set(Some(parent_key.to_string()));
    }

    /// Close the add dialog
    pub fn close_add_dialog(&self) {
        self.set_add_dialog_parent.set(None);
    }
}
