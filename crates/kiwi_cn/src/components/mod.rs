//! Themed components built on kiwi_dom primitives
//!
//! Each component follows a consistent pattern:
//! - Builder function (e.g., `button("Label")`)
//! - Variant enum (e.g., `ButtonVariant`)
//! - Size enum (e.g., `ButtonSize`)
//! - Implements `ElementBuilder` for rendering

pub mod button;
pub mod spinner;
pub mod tabs;

pub use button::{button, Button, ButtonAnimation, ButtonBuilder, ButtonSize, ButtonVariant, IconPosition};
pub use spinner::{spinner, Spinner, SpinnerSize};
pub use tabs::{
    tab, tab_list, tab_panel, tabs, TabBuilder, TabListBuilder, TabPanelBuilder, TabsBuilder,
    TabsContext,
};
