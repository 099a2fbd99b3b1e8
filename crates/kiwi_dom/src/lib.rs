//! Kiwi DOM
//!
//! Markup-tree primitives for the kiwi component library:
//!
//! - **Element builders**: fluent, declarative construction of markup
//!   (`div()`, `span()`, `button()`, `text()`)
//! - **DomTree**: the materialized node tree with queries and synchronous
//!   click dispatch
//! - **HTML output**: serialize a tree to escaped HTML text
//! - **Class composition**: ordered joining of class fragments
//!
//! # Example
//!
//! ```rust
//! use kiwi_dom::prelude::*;
//!
//! let ui = div()
//!     .class("panel")
//!     .child(text("Hello"))
//!     .child(span().class("badge").text("3"));
//!
//! let tree = DomTree::from_element(&ui);
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.text_content(tree.root().unwrap()), "Hello3");
//! ```

pub mod class_list;
pub mod element;
pub mod event;
pub mod html;
pub mod tree;

pub use class_list::class_list;
pub use element::{div, span, text, Element, ElementBuilder};
pub use event::{EventCallback, EventContext};
pub use html::to_html;
pub use tree::{DomTree, Node, NodeId};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::class_list::class_list;
    pub use crate::element::{div, span, text, Element, ElementBuilder};
    pub use crate::event::{EventCallback, EventContext};
    pub use crate::html::to_html;
    pub use crate::tree::{DomTree, Node, NodeId};
}
