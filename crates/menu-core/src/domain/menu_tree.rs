// ============================================================================
// Menu Core - Menu Tree Node
// File: crates/menu-core/src/domain/menu_tree.rs
// Description: Navigation tree node, also the persisted cache shape
// ============================================================================

use serde::{Deserialize, Serialize};

use super::menu_record::MenuRecord;

/// A menu record with its ordered children.
///
/// Serialized flat (record fields next to `level` and `children`); a missing
/// `children` field deserializes to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTreeNode {
    #[serde(flatten)]
    pub record: MenuRecord,

    /// Depth in the tree, 0 for root nodes.
    pub level: u32,

    #[serde(default)]
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    pub fn new(record: MenuRecord, level: u32) -> Self {
        Self {
            record,
            level,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
