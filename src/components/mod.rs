//! UI Components
//!
//! Reusable Leptos components.

mod add_dialog;
mod checkbox_tree;
mod data_grid;
mod toolbar;

pub use add_dialog::AddDialog;
pub use checkbox_tree::CheckboxTree;
pub use data_grid::DataGrid;
pub use toolbar::Toolbar;
