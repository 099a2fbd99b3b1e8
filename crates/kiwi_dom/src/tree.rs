//! Materialized markup tree
//!
//! Builders (see [`crate::element`]) render into a [`DomTree`]: a
//! slotmap-backed arena of [`Node`]s with parent/child links. The tree is
//! what a host application serializes to HTML and what tests query; it also
//! dispatches click events to node handlers, honoring `disabled` and
//! effective visibility.

use slotmap::{new_key_type, SlotMap};

use indexmap::IndexMap;

use crate::event::{EventCallback, EventContext};

new_key_type! {
    /// Identifier of one node in a [`DomTree`]
    pub struct NodeId;
}

/// A materialized markup node
pub struct Node {
    /// Element tag name (`div`, `span`, `button`, ...)
    pub tag: &'static str,
    /// DOM `id` attribute
    pub dom_id: Option<String>,
    /// Class fragments, serialized space-joined
    pub classes: Vec<String>,
    /// Remaining attributes, in insertion order
    pub attrs: IndexMap<String, String>,
    /// Inline style declarations (custom properties), in insertion order
    pub style_props: IndexMap<String, String>,
    /// Own text content, rendered before child elements
    pub text: Option<String>,
    /// The `hidden` flag: present in the tree but not shown
    pub hidden: bool,
    /// The `disabled` flag: present but not interactive
    pub disabled: bool,
    pub(crate) on_click: Option<EventCallback>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Whether `name` appears among this node's class fragments
    ///
    /// Fragments may themselves be pre-joined class strings, so matching
    /// splits on whitespace.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes
            .iter()
            .flat_map(|c| c.split_whitespace())
            .any(|c| c == name)
    }

    /// The full class attribute value
    pub fn class_attr(&self) -> String {
        crate::class_list(self.classes.iter())
    }
}

/// The materialized node tree
#[derive(Default)]
pub struct DomTree {
    nodes: SlotMap<NodeId, Node>,
    root: Option<NodeId>,
}

impl DomTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a builder into a fresh tree and make it the root
    pub fn from_element(builder: &impl crate::element::ElementBuilder) -> Self {
        let mut tree = Self::new();
        let root = builder.build(&mut tree);
        tree.root = Some(root);
        tracing::trace!(nodes = tree.len(), "tree built");
        tree
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Insert a detached node
    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.insert(node)
    }

    /// Attach an already-built node as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the node carrying the given DOM `id` attribute
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.dom_id.as_deref() == Some(dom_id))
            .map(|(id, _)| id)
    }

    /// All nodes carrying the given class, in insertion order
    pub fn find_all_by_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    /// Concatenated text of a node and its descendants, document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(node) = self.nodes.get(id) {
            if let Some(text) = &node.text {
                out.push_str(text);
            }
            for &child in &node.children {
                self.collect_text(child, out);
            }
        }
    }

    /// Whether a node is shown: neither it nor any ancestor carries `hidden`
    pub fn is_effectively_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get(node_id) else {
                return false;
            };
            if node.hidden {
                return false;
            }
            current = node.parent;
        }
        true
    }

    /// Dispatch a click to the node's handler
    ///
    /// Returns whether a handler ran. Disabled and effectively hidden nodes
    /// swallow the event, matching native control behavior.
    pub fn click(&self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if node.disabled || !self.is_effectively_visible(id) {
            tracing::trace!(tag = node.tag, "click suppressed on inert node");
            return false;
        }
        match &node.on_click {
            Some(handler) => {
                handler(&EventContext { node_id: id });
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{div, span};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_build_tree() {
        let ui = div().child(div().class("a")).child(div().class("b"));

        let tree = DomTree::from_element(&ui);
        let root = tree.root().unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.children(root).len(), 2);
    }

    #[test]
    fn test_find_by_dom_id_and_class() {
        let ui = div()
            .child(span().dom_id("label-1").class("badge primary"))
            .child(span().class("badge"));

        let tree = DomTree::from_element(&ui);

        assert!(tree.find_by_dom_id("label-1").is_some());
        assert!(tree.find_by_dom_id("missing").is_none());
        assert_eq!(tree.find_all_by_class("badge").len(), 2);
        assert_eq!(tree.find_all_by_class("primary").len(), 1);
    }

    #[test]
    fn test_text_content_document_order() {
        let ui = div()
            .text("a")
            .child(span().text("b").child(span().text("c")))
            .child(span().text("d"));

        let tree = DomTree::from_element(&ui);
        assert_eq!(tree.text_content(tree.root().unwrap()), "abcd");
    }

    #[test]
    fn test_hidden_ancestor_hides_descendants() {
        let ui = div()
            .hidden(true)
            .child(span().dom_id("inner").text("still here"));

        let tree = DomTree::from_element(&ui);
        let inner = tree.find_by_dom_id("inner").unwrap();

        // present in the tree, not visible
        assert_eq!(tree.text_content(inner), "still here");
        assert!(!tree.is_effectively_visible(inner));
    }

    #[test]
    fn test_click_dispatch() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let ui = div().dom_id("target").on_click(move |_| {
            counter.set(counter.get() + 1);
        });

        let tree = DomTree::from_element(&ui);
        let target = tree.find_by_dom_id("target").unwrap();

        assert!(tree.click(target));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_click_suppressed_when_disabled_or_hidden() {
        let clicks = Rc::new(Cell::new(0));

        let counter = Rc::clone(&clicks);
        let disabled = div().dom_id("d").disabled(true).on_click(move |_| {
            counter.set(counter.get() + 1);
        });
        let tree = DomTree::from_element(&disabled);
        assert!(!tree.click(tree.find_by_dom_id("d").unwrap()));

        let counter = Rc::clone(&clicks);
        let hidden = div().hidden(true).child(div().dom_id("h").on_click(move |_| {
            counter.set(counter.get() + 1);
        }));
        let tree = DomTree::from_element(&hidden);
        assert!(!tree.click(tree.find_by_dom_id("h").unwrap()));

        assert_eq!(clicks.get(), 0);
    }
}
