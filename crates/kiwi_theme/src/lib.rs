//! Kiwi Theme
//!
//! Design tokens for the kiwi component library. A [`Theme`] is a small
//! record of color tokens that a container component exposes to its subtree
//! as CSS custom properties; descendants never read the palette directly.
//!
//! # Example
//!
//! ```rust
//! use kiwi_theme::Theme;
//!
//! let theme = Theme::kiwi();
//! let vars = theme.css_vars();
//! assert_eq!(vars[0], ("--primary", "#8bc34a".to_string()));
//! ```

pub mod theme;

pub use theme::Theme;
