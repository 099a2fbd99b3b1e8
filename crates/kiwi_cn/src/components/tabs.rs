//! Tabs - a selection container with triggers and content panels
//!
//! One [`TabsContext`] owns the active identifier and the effective theme.
//! The context is handed explicitly to every trigger and panel, so a
//! trigger/panel without a container is a compile-time impossibility rather
//! than a silently inert control. Triggers mutate the selection through
//! [`TabsContext::activate`]; panels read it to decide visibility. Inactive
//! panels stay in the tree with the `hidden` flag set, so panel content
//! survives switching away and back.
//!
//! # Example
//!
//! ```rust
//! use kiwi_cn::prelude::*;
//!
//! let ctx = TabsContext::new("preview");
//!
//! let ui = cn::tabs(&ctx)
//!     .child(
//!         cn::tab_list()
//!             .child(cn::tab(&ctx, "preview").child(text("Preview")))
//!             .child(cn::tab(&ctx, "html").child(text("HTML"))),
//!     )
//!     .child(cn::tab_panel(&ctx, "preview").child(text("Shiny widgets")))
//!     .child(cn::tab_panel(&ctx, "html").child(text("<button>…</button>")));
//!
//! let tree = DomTree::from_element(&ui);
//! let preview = tree.find_by_dom_id("panel-preview").unwrap();
//! assert!(tree.is_effectively_visible(preview));
//!
//! ctx.activate("html");
//! assert!(ctx.state().take_dirty()); // host rebuilds here
//! ```

use kiwi_core::State;
use kiwi_dom::class_list;
use kiwi_dom::element::{div, span, Element, ElementBuilder};
use kiwi_dom::tree::{DomTree, NodeId};
use kiwi_theme::Theme;

/// Shared handle linking one tab container to its triggers and panels
///
/// Cloning shares the underlying selection state; all clones observe and
/// mutate the same active identifier.
#[derive(Clone)]
pub struct TabsContext {
    active: State<String>,
    theme: Theme,
}

impl TabsContext {
    /// Create a context with the default theme and an initial selection
    pub fn new(default_active: impl Into<String>) -> Self {
        Self::with_theme(default_active, Theme::default())
    }

    /// Create a context with a caller-supplied theme
    pub fn with_theme(default_active: impl Into<String>, theme: Theme) -> Self {
        Self {
            active: State::new(default_active.into()),
            theme,
        }
    }

    /// The currently active identifier
    pub fn active(&self) -> String {
        self.active.get()
    }

    /// Whether `id` is the active identifier
    pub fn is_active(&self, id: &str) -> bool {
        self.active.get() == id
    }

    /// Make `id` the active identifier
    ///
    /// Idempotent: re-activating the current identifier neither writes the
    /// state nor schedules a rebuild. Any identifier is accepted; one with
    /// no matching panel simply leaves no panel visible.
    pub fn activate(&self, id: impl Into<String>) {
        let id = id.into();
        let current = self.active.get();
        if current == id {
            return;
        }
        tracing::debug!(from = %current, to = %id, "tab activated");
        self.active.set(id);
    }

    /// The effective theme for this container's subtree
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The underlying selection state (dirty-flag access for host loops)
    pub fn state(&self) -> &State<String> {
        &self.active
    }
}

/// The wrapping region exposing the theme to descendants
pub struct TabsBuilder {
    ctx: TabsContext,
    children: Vec<Box<dyn ElementBuilder>>,
}

/// Create the tabs container region
pub fn tabs(ctx: &TabsContext) -> TabsBuilder {
    TabsBuilder {
        ctx: ctx.clone(),
        children: Vec::new(),
    }
}

impl TabsBuilder {
    /// Append a child builder (tab lists, panels, arbitrary markup)
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl ElementBuilder for TabsBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let mut el = div().class("kiwi-tabs");
        for (name, value) in self.ctx.theme().css_vars() {
            el = el.style_prop(name, value);
        }
        let node = el.build(tree);
        for child in &self.children {
            let built = child.build(tree);
            tree.append_child(node, built);
        }
        node
    }
}

/// The trigger strip grouping tab buttons
pub struct TabListBuilder {
    children: Vec<Box<dyn ElementBuilder>>,
}

/// Create a tab list
pub fn tab_list() -> TabListBuilder {
    TabListBuilder {
        children: Vec::new(),
    }
}

impl TabListBuilder {
    /// Append a trigger
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl ElementBuilder for TabListBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let node = div().class("kiwi-tab-list").role("tablist").build(tree);
        for child in &self.children {
            let built = child.build(tree);
            tree.append_child(node, built);
        }
        node
    }
}

/// A clickable trigger bound to one identifier
pub struct TabBuilder {
    ctx: TabsContext,
    id: String,
    children: Vec<Box<dyn ElementBuilder>>,
}

/// Create a trigger for `id` inside the given container context
pub fn tab(ctx: &TabsContext, id: impl Into<String>) -> TabBuilder {
    TabBuilder {
        ctx: ctx.clone(),
        id: id.into(),
        children: Vec::new(),
    }
}

impl TabBuilder {
    /// Append trigger content (label text or richer markup)
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl ElementBuilder for TabBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let is_active = self.ctx.is_active(&self.id);
        let ctx = self.ctx.clone();
        let id = self.id.clone();

        let el = Element::new("button")
            .role("tab")
            .aria("selected", if is_active { "true" } else { "false" })
            .aria("controls", format!("panel-{}", self.id))
            .dom_id(format!("tab-{}", self.id))
            .class(class_list([
                "kiwi-tab",
                if is_active { "kiwi-tab-active" } else { "" },
            ]))
            .on_click(move |_| ctx.activate(id.clone()));

        let node = el.build(tree);
        for child in &self.children {
            let built = child.build(tree);
            tree.append_child(node, built);
        }
        if is_active {
            let indicator = span().class("kiwi-tab-active-indicator").build(tree);
            tree.append_child(node, indicator);
        }
        node
    }
}

/// A content region bound to one identifier
pub struct TabPanelBuilder {
    ctx: TabsContext,
    id: String,
    children: Vec<Box<dyn ElementBuilder>>,
}

/// Create a content panel for `id` inside the given container context
pub fn tab_panel(ctx: &TabsContext, id: impl Into<String>) -> TabPanelBuilder {
    TabPanelBuilder {
        ctx: ctx.clone(),
        id: id.into(),
        children: Vec::new(),
    }
}

impl TabPanelBuilder {
    /// Append panel content
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl ElementBuilder for TabPanelBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let is_active = self.ctx.is_active(&self.id);

        // Hidden, never unmounted: the subtree is built either way so panel
        // content keeps its state across tab switches.
        let el = div()
            .role("tabpanel")
            .dom_id(format!("panel-{}", self.id))
            .aria("labelledby", format!("tab-{}", self.id))
            .hidden(!is_active)
            .class(class_list([
                "kiwi-tab-panel",
                if is_active { "kiwi-tab-panel-active" } else { "" },
            ]));

        let node = el.build(tree);
        for child in &self.children {
            let built = child.build(tree);
            tree.append_child(node, built);
        }
        node
    }
}
