//! Node Tree Store
//!
//! In-memory database → table → column hierarchy backing the checkbox
//! tree. Every parent keeps a synthetic "add" leaf as its last child; a
//! deletion that leaves a parent with no real entry collapses the parent
//! as well.

use std::collections::BTreeSet;

use crate::models::{Node, NodeIcon, NodeKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeTree {
    roots: Vec<Node>,
}

impl NodeTree {
    /// Fixed initial shape of the demo schema.
    pub fn seeded() -> Self {
        let roots = vec![
            Node::data(
                "base1",
                "Base1",
                NodeIcon::Database,
                Some(vec![
                    Node::data(
                        "table1",
                        "Table1",
                        NodeIcon::Table,
                        Some(vec![
                            Node::data("column1", "Column1", NodeIcon::Column, None),
                            Node::data("column2", "Column2", NodeIcon::Column, None),
                            Node::data("column3", "Column3", NodeIcon::Column, None),
                            Node::add_affordance("add-column"),
                        ]),
                    ),
                    Node::data("table2", "Table2", NodeIcon::Table, None),
                    Node::add_affordance("add-table"),
                ]),
            ),
            Node::add_affordance("add-base"),
        ];
        Self { roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn contains(&self, key: &str) -> bool {
        fn walk(nodes: &[Node], key: &str) -> bool {
            nodes.iter().any(|n| {
                n.key == key || n.children.as_deref().map_or(false, |kids| walk(kids, key))
            })
        }
        walk(&self.roots, key)
    }

    /// Remove the first node (depth-first) whose key is `key`, dropping the
    /// key from `checked` as well. Parents left without a `Data` child are
    /// removed recursively; the synthetic root (the top-level list) never
    /// collapses. An absent key is a silent no-op.
    pub fn delete(&mut self, key: &str, checked: &mut BTreeSet<String>) {
        delete_in(&mut self.roots, key, checked);
    }
}

fn delete_in(children: &mut Vec<Node>, key: &str, checked: &mut BTreeSet<String>) -> bool {
    let mut deleted = false;

    if let Some(i) = children.iter().position(|c| c.key == key) {
        children.remove(i);
        checked.remove(key);
        deleted = true;
    } else {
        for child in children.iter_mut() {
            if let Some(kids) = child.children.as_mut() {
                if delete_in(kids, key, checked) {
                    deleted = true;
                    break;
                }
            }
        }
    }

    // Cascade on the way back up: a parent whose children no longer hold a
    // real entry goes away with them.
    if deleted {
        children.retain(|c| {
            let orphaned = c
                .children
                .as_deref()
                .map_or(false, |kids| !kids.iter().any(|k| k.kind == NodeKind::Data));
            if orphaned {
                checked.remove(&c.key);
            }
            !orphaned
        });
    }

    deleted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn child_keys<'a>(tree: &'a NodeTree, parent: &str) -> Vec<&'a str> {
        fn find<'a>(nodes: &'a [Node], key: &str) -> Option<&'a Node> {
            for n in nodes {
                if n.key == key {
                    return Some(n);
                }
                if let Some(kids) = n.children.as_deref() {
                    if let Some(found) = find(kids, key) {
                        return Some(found);
                    }
                }
            }
            None
        }
        find(tree.roots(), parent)
            .and_then(|n| n.children.as_deref())
            .map(|kids| kids.iter().map(|k| k.key.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_delete_absent_key_is_a_no_op() {
        let mut tree = NodeTree::seeded();
        let before = tree.clone();
        let mut checks = checked(&["column1"]);

        tree.delete("no-such-key", &mut checks);

        assert_eq!(tree, before);
        assert_eq!(checks, checked(&["column1"]));
    }

    #[test]
    fn test_delete_leaf_without_cascade() {
        let mut tree = NodeTree::seeded();
        let mut checks = BTreeSet::new();

        tree.delete("column2", &mut checks);

        assert_eq!(child_keys(&tree, "table1"), ["column1", "column3", "add-column"]);
    }

    #[test]
    fn test_delete_removes_key_from_checked_set() {
        let mut tree = NodeTree::seeded();
        let mut checks = checked(&["column2", "table2"]);

        tree.delete("column2", &mut checks);

        assert_eq!(checks, checked(&["table2"]));
    }

    #[test]
    fn test_last_real_column_cascades_to_table() {
        let mut tree = NodeTree::seeded();
        let mut checks = checked(&["column1", "column3", "table1"]);

        tree.delete("column2", &mut checks);
        tree.delete("column1", &mut checks);
        tree.delete("column3", &mut checks);

        // table1 held only its add placeholder and was collapsed with it
        assert!(!tree.contains("table1"));
        assert!(tree.contains("table2"));
        assert_eq!(child_keys(&tree, "base1"), ["table2", "add-table"]);
        assert!(checks.is_empty());
    }

    #[test]
    fn test_cascade_reaches_the_database_level() {
        let mut tree = NodeTree::seeded();
        let mut checks = BTreeSet::new();

        tree.delete("table2", &mut checks);
        tree.delete("column1", &mut checks);
        tree.delete("column2", &mut checks);
        tree.delete("column3", &mut checks);

        // table1 collapsed, leaving base1 with only its placeholder
        assert!(!tree.contains("table1"));
        assert!(!tree.contains("base1"));
        // the synthetic root never collapses
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.roots()[0].key, "add-base");
    }

    #[test]
    fn test_no_parent_survives_with_only_a_placeholder_child() {
        let mut tree = NodeTree::seeded();
        let mut checks = BTreeSet::new();

        for key in ["column1", "column2", "column3", "table2"] {
            tree.delete(key, &mut checks);

            fn assert_has_data_child(node: &Node) {
                if let Some(kids) = node.children.as_deref() {
                    assert!(
                        kids.iter().any(|k| k.kind == NodeKind::Data),
                        "{} survived with only placeholder children",
                        node.key
                    );
                    kids.iter().for_each(assert_has_data_child);
                }
            }
            tree.roots().iter().for_each(assert_has_data_child);
        }
    }
}
