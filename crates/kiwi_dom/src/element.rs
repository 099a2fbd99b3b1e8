//! Fluent element builders
//!
//! Provides a declarative builder API for composing markup:
//!
//! ```rust
//! use kiwi_dom::prelude::*;
//!
//! let ui = div()
//!     .class("kiwi-tabs")
//!     .style_prop("--primary", "#8bc34a")
//!     .child(span().class("kiwi-tab-list").text("Preview"));
//! ```
//!
//! Builders are inert descriptions; nothing exists until they are rendered
//! into a [`DomTree`] through [`ElementBuilder::build`]. Components implement
//! [`ElementBuilder`] themselves and delegate to the elements they compose,
//! so an application tree can mix raw elements and components freely.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::event::{EventCallback, EventContext};
use crate::tree::{DomTree, Node, NodeId};

/// Types that can materialize themselves into a [`DomTree`]
pub trait ElementBuilder {
    /// Build this element and its subtree, returning the subtree root
    fn build(&self, tree: &mut DomTree) -> NodeId;
}

impl<B: ElementBuilder + ?Sized> ElementBuilder for Box<B> {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        (**self).build(tree)
    }
}

impl<B: ElementBuilder + ?Sized> ElementBuilder for Rc<B> {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        (**self).build(tree)
    }
}

/// A markup element builder with fluent methods
pub struct Element {
    tag: &'static str,
    dom_id: Option<String>,
    classes: Vec<String>,
    attrs: IndexMap<String, String>,
    style_props: IndexMap<String, String>,
    text: Option<String>,
    hidden: bool,
    disabled: bool,
    on_click: Option<EventCallback>,
    children: Vec<Box<dyn ElementBuilder>>,
}

impl Element {
    /// Create a new element builder for the given tag
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            dom_id: None,
            classes: Vec::new(),
            attrs: IndexMap::new(),
            style_props: IndexMap::new(),
            text: None,
            hidden: false,
            disabled: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Set the DOM `id` attribute
    pub fn dom_id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    /// Append a class fragment; empty fragments are dropped
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute; later writes to the same name win
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the ARIA `role`
    pub fn role(self, role: impl Into<String>) -> Self {
        self.attr("role", role)
    }

    /// Set an `aria-*` attribute by suffix: `aria("selected", "true")`
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{name}"), value)
    }

    /// Add an inline style declaration, e.g. a CSS custom property
    pub fn style_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style_props.insert(name.into(), value.into());
        self
    }

    /// Set the `hidden` flag: the subtree stays in the tree but is not shown
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set the `disabled` flag: the element stays shown but is not interactive
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set own text content, rendered before child elements
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the click handler
    pub fn on_click<F>(self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on_click_handler(Rc::new(handler))
    }

    /// Set the click handler from an existing callback
    pub fn on_click_handler(mut self, handler: EventCallback) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Append a child builder
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append several child builders
    pub fn children<I, B>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: ElementBuilder + 'static,
    {
        for child in children {
            self.children.push(Box::new(child));
        }
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

impl ElementBuilder for Element {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let id = tree.insert(Node {
            tag: self.tag,
            dom_id: self.dom_id.clone(),
            classes: self.classes.clone(),
            attrs: self.attrs.clone(),
            style_props: self.style_props.clone(),
            text: self.text.clone(),
            hidden: self.hidden,
            disabled: self.disabled,
            on_click: self.on_click.clone(),
            parent: None,
            children: Vec::new(),
        });
        for child in &self.children {
            let child_id = child.build(tree);
            tree.append_child(id, child_id);
        }
        id
    }
}

/// Convenience function to create a `div` builder
pub fn div() -> Element {
    Element::new("div")
}

/// Convenience function to create a `span` builder
pub fn span() -> Element {
    Element::new("span")
}

/// Convenience function to create a `button` builder
pub fn button() -> Element {
    Element::new("button")
}

/// An inline text run (a bare `span` carrying only text)
pub fn text(content: impl Into<String>) -> Element {
    span().text(content)
}
