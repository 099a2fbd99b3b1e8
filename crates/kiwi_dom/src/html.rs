//! HTML text output
//!
//! Serializes a [`DomTree`] to HTML for embedding in a host page. Attribute
//! order is deterministic: `id`, `class`, `style`, then remaining attributes
//! in insertion order, then the bare boolean flags `hidden` and `disabled`.
//! Text content and attribute values are escaped.

use crate::tree::{DomTree, NodeId};

/// Serialize the whole tree starting at its root
pub fn to_html(tree: &DomTree) -> String {
    match tree.root() {
        Some(root) => node_to_html(tree, root),
        None => String::new(),
    }
}

/// Serialize one node and its subtree
pub fn node_to_html(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, id, &mut out);
    out
}

fn write_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };

    out.push('<');
    out.push_str(node.tag);

    if let Some(dom_id) = &node.dom_id {
        push_attr(out, "id", dom_id);
    }
    if !node.classes.is_empty() {
        push_attr(out, "class", &node.class_attr());
    }
    if !node.style_props.is_empty() {
        let style = node
            .style_props
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        push_attr(out, "style", &style);
    }
    for (name, value) in &node.attrs {
        push_attr(out, name, value);
    }
    if node.hidden {
        out.push_str(" hidden");
    }
    if node.disabled {
        out.push_str(" disabled");
    }
    out.push('>');

    if let Some(text) = &node.text {
        out.push_str(&escape_text(text));
    }
    for &child in tree.children(id) {
        write_node(tree, child, out);
    }

    out.push_str("</");
    out.push_str(node.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
