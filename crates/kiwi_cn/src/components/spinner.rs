//! Spinner component for loading indicators
//!
//! A standalone indicator the host stylesheet animates. The Button renders
//! its own inline loader; this component is for loading states outside a
//! button.
//!
//! # Example
//!
//! ```rust
//! use kiwi_cn::prelude::*;
//!
//! let busy = cn::spinner().size(SpinnerSize::Large);
//! let tree = DomTree::from_element(&busy);
//! # let _ = tree;
//! ```

use kiwi_dom::element::{span, ElementBuilder};
use kiwi_dom::tree::{DomTree, NodeId};

/// Spinner size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    /// Small spinner
    Small,
    /// Default size
    #[default]
    Medium,
    /// Large spinner
    Large,
}

impl SpinnerSize {
    fn as_str(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "small",
            SpinnerSize::Medium => "medium",
            SpinnerSize::Large => "large",
        }
    }
}

/// Loading indicator component
pub struct Spinner {
    size: SpinnerSize,
}

/// Create a spinner
pub fn spinner() -> Spinner {
    Spinner {
        size: SpinnerSize::default(),
    }
}

impl Spinner {
    /// Set the spinner size
    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }
}

impl ElementBuilder for Spinner {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        span()
            .role("status")
            .class("kiwi-spinner")
            .class(format!("kiwi-spinner--{}", self.size.as_str()))
            .build(tree)
    }
}
