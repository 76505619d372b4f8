// ============================================================================
// Menu Core - Menu Record Entity
// File: crates/menu-core/src/domain/menu_record.rs
// Description: Canonical, strongly typed menu record
// ============================================================================

use serde::{Deserialize, Serialize};

/// Canonical menu record produced by the normalizer.
///
/// `path` is the materialized ancestry (`/root/child/...`) and depends only on
/// the chain of ids from the root, never on sibling order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub priority: i64,
    pub menu_number: i64,
    pub is_action: bool,
    pub path: String,
}

impl MenuRecord {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Sibling ordering key: priority first, then menu number.
    pub fn sort_key(&self) -> (i64, i64) {
        (self.priority, self.menu_number)
    }
}
