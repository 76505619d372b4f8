use std::fmt::Write;

use menu_core::MenuTreeNode;

/// Indented outline of the tree, one menu per line.
pub fn render_outline(tree: &[MenuTreeNode]) -> String {
    let mut out = String::new();
    for node in tree {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &MenuTreeNode) {
    let indent = "  ".repeat(node.level as usize);
    let marker = if node.record.is_action { " *" } else { "" };
    let _ = writeln!(
        out,
        "{}{} ({}){}",
        indent, node.record.name, node.record.path, marker
    );
    for child in &node.children {
        write_node(out, child);
    }
}
