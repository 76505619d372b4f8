//! Read-only helpers over built trees and flat record lists

use std::collections::{HashMap, HashSet};

use crate::domain::{MenuRecord, MenuTreeNode};

/// Depth-first lookup by id.
pub fn find_menu<'a>(tree: &'a [MenuTreeNode], menu_id: &str) -> Option<&'a MenuTreeNode> {
    let mut stack: Vec<&MenuTreeNode> = tree.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.id() == menu_id {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// Tree back to records, pre-order.
pub fn flatten_tree(tree: &[MenuTreeNode]) -> Vec<MenuRecord> {
    let mut out = Vec::new();
    let mut stack: Vec<&MenuTreeNode> = tree.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node.record.clone());
        stack.extend(node.children.iter().rev());
    }
    out
}

pub fn count_nodes(tree: &[MenuTreeNode]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&MenuTreeNode> = tree.iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}

/// Ancestor ids of `menu_id`, root-most first, ending with the direct parent.
///
/// Stops at the first parent that is not in `records`; never loops on cyclic
/// input.
pub fn menu_ancestors(records: &[MenuRecord], menu_id: &str) -> Vec<String> {
    let by_id: HashMap<&str, &MenuRecord> = records.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut ancestors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::from([menu_id]);
    let mut current = by_id.get(menu_id).copied();

    while let Some(record) = current {
        let Some(parent_id) = record.parent_id.as_deref() else { break };
        let Some(parent) = by_id.get(parent_id).copied() else { break };
        if !seen.insert(parent_id) {
            break;
        }
        ancestors.push(parent_id.to_string());
        current = Some(parent);
    }

    ancestors.reverse();
    ancestors
}
