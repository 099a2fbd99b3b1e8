//! Event handler storage for markup elements
//!
//! Handlers are attached to element builders (`.on_click(..)`), carried onto
//! the materialized node, and invoked synchronously by
//! [`DomTree::click`](crate::tree::DomTree::click). There is no event queue
//! and no asynchronous suspension point; a dispatch either runs the handler
//! before returning or does nothing.

use std::rc::Rc;

use crate::tree::NodeId;

/// Callback for handling events
///
/// Uses `Rc` since the UI is single-threaded.
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// Context passed to event handlers
#[derive(Clone, Copy, Debug)]
pub struct EventContext {
    /// The node that received the event
    pub node_id: NodeId,
}
