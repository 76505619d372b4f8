//! Flattening of nested backend payloads into canonical records

use tracing::debug;

use crate::domain::{MenuRecord, RawMenuRecord};
use crate::error::MenuError;

use super::normalizer::normalize;

/// Walk every record and nested child in pre-order and emit one canonical
/// record per visited node.
///
/// A nested child is linked to its enclosing record: nesting overrides any
/// `parentId` the child declares. The walk uses an explicit stack, so depth is
/// bounded only by the input.
pub fn flatten(raw: &[RawMenuRecord]) -> Result<Vec<MenuRecord>, MenuError> {
    let mut out = Vec::with_capacity(raw.len());

    // (record, depth)
    let mut stack: Vec<(&RawMenuRecord, usize)> = raw.iter().rev().map(|r| (r, 0)).collect();
    // Enclosing records of the node being visited: (id, path)
    let mut chain: Vec<(&str, String)> = Vec::new();

    while let Some((node, depth)) = stack.pop() {
        chain.truncate(depth);

        if node.id.trim().is_empty() {
            return Err(MenuError::MalformedMenuData(format!(
                "menu record without id at depth {}",
                depth
            )));
        }
        if chain.iter().any(|(id, _)| *id == node.id) {
            return Err(MenuError::MalformedMenuData(format!(
                "menu '{}' is nested inside itself",
                node.id
            )));
        }

        let record = match chain.last() {
            Some((enclosing_id, enclosing_path)) => {
                let mut record = normalize(node, enclosing_path);
                if record.parent_id.as_deref() != Some(*enclosing_id) {
                    if let Some(declared) = &record.parent_id {
                        debug!(
                            "Menu '{}' declares parent '{}' but is nested under '{}'",
                            node.id, declared, enclosing_id
                        );
                    }
                    record.parent_id = Some(enclosing_id.to_string());
                }
                record
            }
            None => normalize(node, ""),
        };

        let children = node.children.as_deref().unwrap_or_default();
        if !children.is_empty() {
            chain.push((node.id.as_str(), record.path.clone()));
            stack.extend(children.iter().rev().map(|c| (c, depth + 1)));
        }

        out.push(record);
    }

    Ok(out)
}
