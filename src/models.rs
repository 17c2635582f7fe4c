//! Data Model
//!
//! Plain data structures shared by the stores and the presentation
//! components: grid rows and patches, tree nodes, column descriptors.

use serde::{Deserialize, Serialize};

/// One grid row of synthetic personal/business data.
///
/// `id` is unique within the row store and immutable once assigned:
/// [`RowPatch`] carries no id field, so no update can touch it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub avatar: String,
    pub email: String,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub zip_code: String,
    pub date: String,
    pub bs: String,
    pub catch_phrase: String,
    pub company_name: String,
    pub words: String,
    pub sentence: String,
}

impl Row {
    /// Cell value for a column key. Unknown keys render empty.
    pub fn field(&self, key: &str) -> &str {
        match key {
            "id" => &self.id,
            "avatar" => &self.avatar,
            "email" => &self.email,
            "title" => &self.title,
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "street" => &self.street,
            "zipCode" => &self.zip_code,
            "date" => &self.date,
            "bs" => &self.bs,
            "catchPhrase" => &self.catch_phrase,
            "companyName" => &self.company_name,
            "words" => &self.words,
            "sentence" => &self.sentence,
            _ => "",
        }
    }

    /// Cheap render key: changes whenever any field does, without cloning
    /// the whole row.
    pub fn cache_key(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// New row value with `patch` merged in; untouched fields preserved.
    pub fn patched(&self, patch: &RowPatch) -> Row {
        let mut row = self.clone();
        macro_rules! merge {
            ($($field:ident),*) => {
                $(if let Some(v) = &patch.$field { row.$field = v.clone(); })*
            };
        }
        merge!(
            avatar, email, title, first_name, last_name, street, zip_code, date, bs,
            catch_phrase, company_name, words, sentence
        );
        row
    }
}

/// Partial row update: `Some` fields overwrite, `None` fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowPatch {
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub date: Option<String>,
    pub bs: Option<String>,
    pub catch_phrase: Option<String>,
    pub company_name: Option<String>,
    pub words: Option<String>,
    pub sentence: Option<String>,
}

impl RowPatch {
    /// Single-field patch keyed by column key. Unknown keys (`id`
    /// included) yield an empty patch.
    pub fn single(key: &str, value: String) -> Self {
        let mut patch = Self::default();
        match key {
            "avatar" => patch.avatar = Some(value),
            "email" => patch.email = Some(value),
            "title" => patch.title = Some(value),
            "firstName" => patch.first_name = Some(value),
            "lastName" => patch.last_name = Some(value),
            "street" => patch.street = Some(value),
            "zipCode" => patch.zip_code = Some(value),
            "date" => patch.date = Some(value),
            "bs" => patch.bs = Some(value),
            "catchPhrase" => patch.catch_phrase = Some(value),
            "companyName" => patch.company_name = Some(value),
            "words" => patch.words = Some(value),
            "sentence" => patch.sentence = Some(value),
            _ => {}
        }
        patch
    }
}

/// How a range update selects its target rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Commit of a single cell edit.
    CellUpdate,
    /// Fill by dragging a cell handle over a range.
    CellDrag,
    /// Paste: only the destination row is touched.
    CopyPaste,
}

/// Node role in the schema tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A real database/table/column entry; carries a checkbox.
    Data,
    /// Synthetic "add" leaf; no checkbox, activation opens the add dialog.
    AddAffordance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeIcon {
    Database,
    Table,
    Column,
    Plus,
}

/// Entry in the database → table → column hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub key: String,
    pub label: String,
    pub icon: NodeIcon,
    pub kind: NodeKind,
    /// `Some` for parents (always ending in an add affordance), `None` for leaves.
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn data(key: &str, label: &str, icon: NodeIcon, children: Option<Vec<Node>>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon,
            kind: NodeKind::Data,
            children,
        }
    }

    pub fn add_affordance(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: "Add".to_string(),
            icon: NodeIcon::Plus,
            kind: NodeKind::AddAffordance,
            children: None,
        }
    }
}

/// Grid column descriptor, the contract the grid component renders from.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub width: u32,
    pub resizable: bool,
    pub frozen: bool,
    pub editable: bool,
}

/// Column layout of the demo grid.
pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "id", name: "ID", width: 80, resizable: true, frozen: true, editable: false },
    ColumnSpec { key: "avatar", name: "Avatar", width: 40, resizable: true, frozen: false, editable: false },
    ColumnSpec { key: "title", name: "Title", width: 200, resizable: true, frozen: false, editable: false },
    ColumnSpec { key: "firstName", name: "First Name", width: 200, resizable: true, frozen: true, editable: true },
    ColumnSpec { key: "lastName", name: "Last Name", width: 200, resizable: true, frozen: true, editable: true },
    ColumnSpec { key: "email", name: "Email", width: 200, resizable: true, frozen: false, editable: true },
    ColumnSpec { key: "street", name: "Street", width: 200, resizable: true, frozen: false, editable: true },
    ColumnSpec { key: "zipCode", name: "ZipCode", width: 200, resizable: true, frozen: false, editable: true },
    ColumnSpec { key: "date", name: "Date", width: 200, resizable: true, frozen: false, editable: true },
    ColumnSpec { key: "bs", name: "bs", width: 200, resizable: true, frozen: false, editable: true },
    ColumnSpec { key: "catchPhrase", name: "Catch Phrase", width: 200, resizable: true, frozen: false, editable: true },
    ColumnSpec { key: "companyName", name: "Company Name", width: 200, resizable: true, frozen: false, editable: true },
    ColumnSpec { key: "sentence", name: "Sentence", width: 200, resizable: true, frozen: false, editable: true },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakedata::create_fake_row;

    #[test]
    fn test_cache_key_tracks_field_edits() {
        let row = create_fake_row(0);
        let edited = row.patched(&RowPatch::single("firstName", "Edited".to_string()));

        assert_ne!(row.cache_key(), edited.cache_key());
        assert_eq!(row.cache_key(), row.clone().cache_key());
    }

    #[test]
    fn test_cache_key_is_stable_under_empty_patch() {
        let row = create_fake_row(1);
        let untouched = row.patched(&RowPatch::default());

        assert_eq!(row.cache_key(), untouched.cache_key());
    }
}
