// ============================================================================
// Menu Core - Raw Menu Entity
// File: crates/menu-core/src/domain/raw_menu.rs
// Description: Untrusted menu resource as returned by the IAM backend
// ============================================================================

use serde::{Deserialize, Serialize};

/// Loosely typed scalar. The backend sends flags and numbers either as JSON
/// primitives or as strings, depending on which service produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl From<bool> for RawScalar {
    fn from(v: bool) -> Self {
        RawScalar::Bool(v)
    }
}

impl From<i64> for RawScalar {
    fn from(v: i64) -> Self {
        RawScalar::Number(v.into())
    }
}

impl From<i32> for RawScalar {
    fn from(v: i32) -> Self {
        RawScalar::Number(v.into())
    }
}

impl From<&str> for RawScalar {
    fn from(v: &str) -> Self {
        RawScalar::Text(v.to_string())
    }
}

/// Raw menu record. Either flat (linked through `parent_id`) or nested
/// through `children`; both shapes can appear in the same payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMenuRecord {
    pub id: String,

    #[serde(default, alias = "parentid", alias = "parentMenuId")]
    pub parent_id: Option<String>,

    #[serde(default, alias = "displayname")]
    pub display_name: Option<String>,

    #[serde(default, alias = "isaction")]
    pub is_action: Option<RawScalar>,

    #[serde(default)]
    pub priority: Option<RawScalar>,

    #[serde(default, alias = "menunumber")]
    pub menu_number: Option<RawScalar>,

    #[serde(default, alias = "menus", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawMenuRecord>>,
}

impl RawMenuRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn named(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<RawScalar>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn menu_number(mut self, menu_number: impl Into<RawScalar>) -> Self {
        self.menu_number = Some(menu_number.into());
        self
    }

    pub fn action(mut self, is_action: impl Into<RawScalar>) -> Self {
        self.is_action = Some(is_action.into());
        self
    }

    pub fn children(mut self, children: Vec<RawMenuRecord>) -> Self {
        self.children = Some(children);
        self
    }
}
