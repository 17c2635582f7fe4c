//! Row Store
//!
//! Ordered in-memory row sequence backing the data grid. Mutations come in
//! from grid events: cell edits (range updates), the Add Row button, and
//! scroll-triggered batch loads.

use crate::fakedata;
use crate::models::{Row, RowPatch, UpdateAction};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    /// Store seeded with generated rows `id_0..id_{count-1}`.
    pub fn seeded(count: usize) -> Self {
        Self { rows: fakedata::create_rows(count) }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Merge `patch` into every row the action targets.
    ///
    /// The target range is `[min(from, to), max(from, to)]` inclusive,
    /// except `CopyPaste` which touches only the destination row `to`.
    /// Each touched row is replaced by a new value with untouched fields
    /// preserved. Indices past the end are skipped.
    pub fn apply_range_update(
        &mut self,
        from: usize,
        to: usize,
        patch: &RowPatch,
        action: UpdateAction,
    ) {
        let (start, end) = match action {
            UpdateAction::CopyPaste => (to, to),
            UpdateAction::CellUpdate | UpdateAction::CellDrag => (from.min(to), from.max(to)),
        };
        for i in start..=end {
            if i >= self.rows.len() {
                break;
            }
            let updated = self.rows[i].patched(patch);
            self.rows[i] = updated;
        }
    }

    /// Append one freshly generated row at the end.
    pub fn append_row(&mut self) {
        self.rows.push(fakedata::create_fake_row(self.rows.len()));
    }

    /// Append a generated batch (scroll loading).
    pub fn extend(&mut self, batch: Vec<Row>) {
        self.rows.extend(batch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_update_is_order_independent() {
        let mut store = RowStore::seeded(4);
        let patch = RowPatch::single("firstName", "Edited".to_string());

        store.apply_range_update(2, 0, &patch, UpdateAction::CellUpdate);

        for i in 0..=2 {
            assert_eq!(store.rows()[i].first_name, "Edited");
        }
        assert_ne!(store.rows()[3].first_name, "Edited");
    }

    #[test]
    fn test_copy_paste_targets_only_destination() {
        let mut store = RowStore::seeded(8);
        let patch = RowPatch::single("email", "pasted@example.com".to_string());

        store.apply_range_update(0, 5, &patch, UpdateAction::CopyPaste);

        for (i, row) in store.rows().iter().enumerate() {
            if i == 5 {
                assert_eq!(row.email, "pasted@example.com");
            } else {
                assert_ne!(row.email, "pasted@example.com");
            }
        }
    }

    #[test]
    fn test_patch_preserves_untouched_fields_and_id() {
        let mut store = RowStore::seeded(1);
        let before = store.rows()[0].clone();
        let patch = RowPatch::single("lastName", "Changed".to_string());

        store.apply_range_update(0, 0, &patch, UpdateAction::CellUpdate);

        let after = &store.rows()[0];
        assert_eq!(after.last_name, "Changed");
        assert_eq!(after.id, before.id);
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.email, before.email);
    }

    #[test]
    fn test_out_of_range_update_is_ignored() {
        let mut store = RowStore::seeded(2);
        let before = store.clone();
        let patch = RowPatch::single("street", "Nowhere".to_string());

        store.apply_range_update(5, 9, &patch, UpdateAction::CellUpdate);

        assert_eq!(store, before);
    }

    #[test]
    fn test_append_row_extends_id_sequence() {
        let mut store = RowStore::seeded(2);
        store.append_row();

        assert_eq!(store.len(), 3);
        assert_eq!(store.rows()[2].id, "id_2");
    }

    #[test]
    fn test_batch_append_keeps_ids_unique_and_ordered() {
        let mut store = RowStore::seeded(2);
        store.extend(crate::fakedata::create_row_batch(50, store.len()));

        assert_eq!(store.len(), 52);
        for (i, row) in store.rows().iter().enumerate() {
            assert_eq!(row.id, format!("id_{}", i));
        }
    }
}
