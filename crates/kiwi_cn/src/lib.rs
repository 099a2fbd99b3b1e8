//! # Kiwi Component Library (kiwi_cn)
//!
//! Themed, accessible components built on `kiwi_dom` primitives.
//!
//! ## Philosophy
//!
//! - **Primitives**: `kiwi_dom` provides the markup building blocks
//!   (element builders, the materialized tree, click dispatch)
//! - **Theme tokens**: `kiwi_theme` provides the color palette, exposed to
//!   component subtrees as CSS custom properties
//! - **Components**: `kiwi_cn` provides styled components whose class
//!   identities the host stylesheet targets
//!
//! ## Example
//!
//! ```rust
//! use kiwi_cn::prelude::*;
//!
//! // Button with variants
//! let submit = cn::button("Submit")
//!     .variant(ButtonVariant::Kiwi)
//!     .size(ButtonSize::Large);
//!
//! // Tabbed panels sharing one selection context
//! let ctx = TabsContext::new("preview");
//! let ui = cn::tabs(&ctx)
//!     .child(
//!         cn::tab_list()
//!             .child(cn::tab(&ctx, "preview").child(text("Preview")))
//!             .child(cn::tab(&ctx, "html").child(text("HTML"))),
//!     )
//!     .child(cn::tab_panel(&ctx, "preview").child(submit))
//!     .child(cn::tab_panel(&ctx, "html").child(text("<button>…</button>")));
//!
//! let tree = DomTree::from_element(&ui);
//! assert!(tree.find_by_dom_id("panel-preview").is_some());
//! ```

pub mod components;

pub use components::*;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button::button;
    pub use crate::components::spinner::spinner;
    pub use crate::components::tabs::{tab, tab_list, tab_panel, tabs};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::button::{
        button, Button, ButtonAnimation, ButtonBuilder, ButtonSize, ButtonVariant, IconPosition,
    };
    pub use crate::components::spinner::{spinner, Spinner, SpinnerSize};
    pub use crate::components::tabs::{
        tab, tab_list, tab_panel, tabs, TabBuilder, TabListBuilder, TabPanelBuilder, TabsBuilder,
        TabsContext,
    };
    // Re-export the substrate types component consumers always need
    pub use kiwi_dom::prelude::*;
    pub use kiwi_theme::Theme;
}
