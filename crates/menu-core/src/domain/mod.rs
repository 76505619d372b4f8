//! # Menu Core - Domain Module
//!
//! Menu entities: the raw backend shape, the canonical record and the tree node.

pub mod raw_menu;
pub mod menu_record;
pub mod menu_tree;

pub use raw_menu::{RawMenuRecord, RawScalar};
pub use menu_record::MenuRecord;
pub use menu_tree::MenuTreeNode;
