//! Kiwi Core
//!
//! Foundational primitives for the kiwi component library:
//!
//! - **State handles**: shared-ownership state values with change tracking
//! - **Colors**: RGBA color values with CSS text round-tripping
//!
//! # Example
//!
//! ```rust
//! use kiwi_core::{Color, State};
//!
//! let active: State<String> = State::new("preview".to_string());
//! active.set("html".to_string());
//! assert_eq!(active.get(), "html");
//! assert!(active.is_dirty());
//!
//! let kiwi_green = Color::from_hex(0x8BC34A);
//! assert_eq!(kiwi_green.to_css(), "#8bc34a");
//! ```

pub mod color;
pub mod reactive;

pub use color::{Color, ColorParseError};
pub use reactive::{DirtyFlag, State};
