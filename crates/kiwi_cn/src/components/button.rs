//! Button component with kiwi-style variants
//!
//! A stateless, themed button: one rendering is a pure function of its
//! configuration. Styling identity is a composed class list the host
//! stylesheet targets; interaction is a single forwarded click handler.
//!
//! # Example
//!
//! ```rust
//! use kiwi_cn::prelude::*;
//!
//! // Primary button (default)
//! let ok = cn::button("OK");
//!
//! // Kiwi-flavored large button
//! let submit = cn::button("Submit")
//!     .variant(ButtonVariant::Kiwi)
//!     .size(ButtonSize::Large);
//!
//! // Loading button - forced non-interactive while the spinner shows
//! let saving = cn::button("Save")
//!     .loading(true)
//!     .on_click(|_| unreachable!("never dispatched while loading"));
//!
//! // Icon after the label
//! let next = cn::button("Next")
//!     .icon(span().class("arrow-right"))
//!     .icon_position(IconPosition::Right);
//! # let _ = (ok, submit, saving, next);
//! ```

use std::cell::OnceCell;
use std::rc::Rc;

use kiwi_dom::class_list;
use kiwi_dom::element::{button as button_element, span, Element, ElementBuilder};
use kiwi_dom::event::{EventCallback, EventContext};
use kiwi_dom::tree::{DomTree, NodeId};

const BASE_CLASS: &str = "kiwi-button";

/// Button visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button
    #[default]
    Primary,
    /// Secondary action
    Secondary,
    /// Confirmation styling
    Success,
    /// Destructive styling
    Danger,
    /// Cautionary styling
    Warning,
    /// The house special
    Kiwi,
}

impl ButtonVariant {
    /// Modifier suffix in the class identity
    fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Kiwi => "kiwi",
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Default size
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

/// Attention animation applied by the host stylesheet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonAnimation {
    /// No animation; still emitted as a modifier so stylesheets can opt in
    #[default]
    None,
    Spin,
    Shake,
    Bounce,
}

impl ButtonAnimation {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonAnimation::None => "none",
            ButtonAnimation::Spin => "spin",
            ButtonAnimation::Shake => "shake",
            ButtonAnimation::Bounce => "bounce",
        }
    }
}

/// Icon position within the button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconPosition {
    /// Icon appears before the label
    #[default]
    Left,
    /// Icon appears after the label
    Right,
}

impl IconPosition {
    fn as_str(&self) -> &'static str {
        match self {
            IconPosition::Left => "left",
            IconPosition::Right => "right",
        }
    }
}

/// Internal configuration for ButtonBuilder
struct ButtonConfig {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    animation: ButtonAnimation,
    full_width: bool,
    icon: Option<Rc<dyn ElementBuilder>>,
    icon_position: IconPosition,
    loading: bool,
    disabled: bool,
    extra_class: Option<String>,
    attrs: Vec<(String, String)>,
    on_click: Option<EventCallback>,
}

/// The built button element
pub struct Button {
    inner: Element,
}

impl Button {
    /// Render a configuration into the final element
    fn from_config(config: &ButtonConfig) -> Self {
        // Class identity, in override order: base, variant, size, animation,
        // conditional full-width and loading modifiers, caller extras last.
        let classes = class_list([
            BASE_CLASS.to_string(),
            format!("{BASE_CLASS}--{}", config.variant.as_str()),
            format!("{BASE_CLASS}--{}", config.size.as_str()),
            format!("{BASE_CLASS}--{}", config.animation.as_str()),
            if config.full_width {
                format!("{BASE_CLASS}--full-width")
            } else {
                String::new()
            },
            if config.loading {
                format!("{BASE_CLASS}--loading")
            } else {
                String::new()
            },
            config.extra_class.clone().unwrap_or_default(),
        ]);

        let mut el = button_element().class(classes);

        // Caller-supplied attributes forward untouched
        for (name, value) in &config.attrs {
            el = el.attr(name.clone(), value.clone());
        }

        if config.loading {
            el = el.child(span().class(format!("{BASE_CLASS}__loader")));
        }

        let label = span()
            .class(format!("{BASE_CLASS}__label"))
            .text(config.label.clone());

        match (&config.icon, config.icon_position) {
            (Some(icon), IconPosition::Left) => {
                el = el.child(icon_wrapper(icon, IconPosition::Left)).child(label);
            }
            (Some(icon), IconPosition::Right) => {
                el = el.child(label).child(icon_wrapper(icon, IconPosition::Right));
            }
            (None, _) => {
                el = el.child(label);
            }
        }

        // Loading wins over any caller-supplied interactive state
        el = el.disabled(config.disabled || config.loading);

        if let Some(handler) = &config.on_click {
            el = el.on_click_handler(Rc::clone(handler));
        }

        Self { inner: el }
    }
}

fn icon_wrapper(icon: &Rc<dyn ElementBuilder>, position: IconPosition) -> Element {
    span()
        .class(format!("{BASE_CLASS}__icon"))
        .class(format!("{BASE_CLASS}__icon--{}", position.as_str()))
        .child(Rc::clone(icon))
}

impl ElementBuilder for Button {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Create a button with a label
///
/// All other configuration is optional and defaulted: primary variant,
/// medium size, no animation, icon on the left, not loading.
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        config: ButtonConfig {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            animation: ButtonAnimation::default(),
            full_width: false,
            icon: None,
            icon_position: IconPosition::default(),
            loading: false,
            disabled: false,
            extra_class: None,
            attrs: Vec::new(),
            on_click: None,
        },
        built: OnceCell::new(),
    }
}

/// Button configuration for building buttons
pub struct ButtonBuilder {
    config: ButtonConfig,
    /// Cached built Button - built lazily on first access
    built: OnceCell<Button>,
}

impl ButtonBuilder {
    /// Get or build the inner Button
    fn get_or_build(&self) -> &Button {
        self.built.get_or_init(|| Button::from_config(&self.config))
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the attention animation
    pub fn animation(mut self, animation: ButtonAnimation) -> Self {
        self.config.animation = animation;
        self
    }

    /// Stretch the button across its container
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.config.full_width = full_width;
        self
    }

    /// Set an icon rendered next to the label
    pub fn icon(mut self, icon: impl ElementBuilder + 'static) -> Self {
        self.config.icon = Some(Rc::new(icon));
        self
    }

    /// Set the icon position
    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.config.icon_position = position;
        self
    }

    /// Show the loading indicator and force the button non-interactive
    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Make the button disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Append a caller class after the composed identity
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.config.extra_class = Some(class.into());
        self
    }

    /// Forward an arbitrary attribute to the underlying element
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.attrs.push((name.into(), value.into()));
        self
    }

    /// Set the click handler
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.config.on_click = Some(Rc::new(handler));
        self
    }

    /// Build the final Button component
    pub fn build_component(self) -> Button {
        Button::from_config(&self.config)
    }
}

impl ElementBuilder for ButtonBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.get_or_build().build(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn root_classes(builder: &ButtonBuilder) -> String {
        let tree = DomTree::from_element(builder);
        tree.get(tree.root().unwrap()).unwrap().class_attr()
    }

    #[test]
    fn test_default_class_identity() {
        assert_eq!(
            root_classes(&button("OK")),
            "kiwi-button kiwi-button--primary kiwi-button--medium kiwi-button--none"
        );
    }

    #[test]
    fn test_modifier_order() {
        let b = button("Go")
            .variant(ButtonVariant::Danger)
            .size(ButtonSize::Small)
            .animation(ButtonAnimation::Shake)
            .full_width(true)
            .loading(true)
            .class("host-extra");
        assert_eq!(
            root_classes(&b),
            "kiwi-button kiwi-button--danger kiwi-button--small kiwi-button--shake \
             kiwi-button--full-width kiwi-button--loading host-extra"
        );
    }

    #[test]
    fn test_label_renders_exactly() {
        let tree = DomTree::from_element(&button("Click me"));
        let root = tree.root().unwrap();
        assert_eq!(tree.text_content(root), "Click me");

        let label = tree.find_all_by_class("kiwi-button__label");
        assert_eq!(label.len(), 1);
    }

    #[test]
    fn test_loading_forces_disabled() {
        let tree = DomTree::from_element(&button("Save").disabled(false).loading(true));
        let root = tree.root().unwrap();
        assert!(tree.get(root).unwrap().disabled);

        // loader is the first child
        let first = tree.children(root)[0];
        assert!(tree.get(first).unwrap().has_class("kiwi-button__loader"));
    }

    #[test]
    fn test_icon_order_left_then_right() {
        let left = button("Next").icon(span().class("arrow"));
        let tree = DomTree::from_element(&left);
        let children = tree.children(tree.root().unwrap());
        assert!(tree.get(children[0]).unwrap().has_class("kiwi-button__icon--left"));
        assert!(tree.get(children[1]).unwrap().has_class("kiwi-button__label"));

        let right = button("Next")
            .icon(span().class("arrow"))
            .icon_position(IconPosition::Right);
        let tree = DomTree::from_element(&right);
        let children = tree.children(tree.root().unwrap());
        assert!(tree.get(children[0]).unwrap().has_class("kiwi-button__label"));
        assert!(tree.get(children[1]).unwrap().has_class("kiwi-button__icon--right"));
    }

    #[test]
    fn test_attrs_forwarded() {
        let b = button("OK").attr("data-testid", "confirm").attr("aria-label", "Confirm");
        let tree = DomTree::from_element(&b);
        let node = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(node.attrs.get("data-testid").unwrap(), "confirm");
        assert_eq!(node.attrs.get("aria-label").unwrap(), "Confirm");
    }

    #[test]
    fn test_click_dispatch_honors_loading() {
        let clicks = Rc::new(Cell::new(0));

        let counter = Rc::clone(&clicks);
        let live = button("Go").on_click(move |_| counter.set(counter.get() + 1));
        let tree = DomTree::from_element(&live);
        assert!(tree.click(tree.root().unwrap()));
        assert_eq!(clicks.get(), 1);

        let counter = Rc::clone(&clicks);
        let loading = button("Go")
            .loading(true)
            .on_click(move |_| counter.set(counter.get() + 1));
        let tree = DomTree::from_element(&loading);
        assert!(!tree.click(tree.root().unwrap()));
        assert_eq!(clicks.get(), 1);
    }
}
