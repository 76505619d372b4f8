//! Navigation tree construction from parent-id links
//!
//! Arena-and-index: records stay in one vector and every link is a position in
//! it, so orphan and cycle detection are plain index lookups.

use std::collections::HashMap;
use tracing::debug;

use crate::domain::{MenuRecord, MenuTreeNode};
use crate::error::MenuError;

use super::normalizer::{is_root_parent, materialize_path};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Build the sorted navigation tree.
///
/// - unknown parent ids are promoted to roots (orphan promotion)
/// - duplicate ids and parent-id cycles are rejected
/// - every sibling list, roots included, is stably sorted by
///   `(priority, menu_number)`
/// - `path` and `level` are re-materialized from the resolved links
pub fn build_tree(flat: Vec<MenuRecord>) -> Result<Vec<MenuTreeNode>, MenuError> {
    let n = flat.len();

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(n);
    for (i, record) in flat.iter().enumerate() {
        if index.insert(record.id.as_str(), i).is_some() {
            return Err(MenuError::DuplicateMenuId(record.id.clone()));
        }
    }

    let parents: Vec<Option<usize>> = flat
        .iter()
        .map(|record| match record.parent_id.as_deref() {
            None => None,
            Some(p) if is_root_parent(p) => None,
            Some(p) => {
                let found = index.get(p).copied();
                if found.is_none() {
                    debug!("Menu '{}' has unknown parent '{}', promoting to root", record.id, p);
                }
                found
            }
        })
        .collect();
    drop(index);

    detect_cycles(&flat, &parents)?;

    let mut roots: Vec<usize> = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, parent) in parents.iter().enumerate() {
        match parent {
            Some(p) => children[*p].push(i),
            None => roots.push(i),
        }
    }

    let mut records = flat;
    let key = |i: &usize| records[*i].sort_key();
    roots.sort_by_key(key);
    for list in children.iter_mut() {
        list.sort_by_key(key);
    }

    // Top-down pass: parents are visited before their children.
    let mut levels = vec![0u32; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(i) = stack.pop() {
        order.push(i);
        for &c in children[i].iter().rev() {
            levels[c] = levels[i] + 1;
            stack.push(c);
        }
    }

    for &i in &order {
        let path = match parents[i] {
            Some(p) => materialize_path(&records[p].path, &records[i].id),
            None => materialize_path("", &records[i].id),
        };
        records[i].path = path;
    }

    // Bottom-up assembly: children are finished before their parent.
    let mut slots: Vec<Option<MenuRecord>> = records.into_iter().map(Some).collect();
    let mut built: Vec<Option<MenuTreeNode>> = (0..n).map(|_| None).collect();
    for &i in order.iter().rev() {
        let Some(record) = slots[i].take() else { continue };
        let mut node = MenuTreeNode::new(record, levels[i]);
        node.children = children[i].iter().filter_map(|&c| built[c].take()).collect();
        built[i] = Some(node);
    }

    Ok(roots.iter().filter_map(|&r| built[r].take()).collect())
}

/// Walk each ancestor chain once; meeting a node that is still in progress
/// means the chain loops back on itself.
fn detect_cycles(records: &[MenuRecord], parents: &[Option<usize>]) -> Result<(), MenuError> {
    let mut marks = vec![Mark::Unvisited; records.len()];
    let mut trail: Vec<usize> = Vec::new();

    for start in 0..records.len() {
        let mut current = Some(start);
        while let Some(i) = current {
            match marks[i] {
                Mark::Done => break,
                Mark::InProgress => {
                    return Err(MenuError::MalformedMenuData(format!(
                        "parent cycle through menu '{}'",
                        records[i].id
                    )));
                }
                Mark::Unvisited => {
                    marks[i] = Mark::InProgress;
                    trail.push(i);
                    current = parents[i];
                }
            }
        }
        for i in trail.drain(..) {
            marks[i] = Mark::Done;
        }
    }

    Ok(())
}
