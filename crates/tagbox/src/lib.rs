//! **tagbox** -- a tag input (token editor) for [`ratatui`] applications.
//!
//! This is the umbrella crate that re-exports everything needed to embed a
//! tag input from a single dependency:
//!
//! ```toml
//! [dependencies]
//! tagbox = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`tagbox_core`] are available at the crate root
//!   ([`Component`], [`Command`], [`HostRequest`], [`Bound`], etc.).
//! * The [`widgets`] module re-exports everything from [`tagbox_widgets`]
//!   (the tag input, its dropdown, validators, and key handling).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use tagbox::widgets::tag_input::{Message, TagInput};
//! use tagbox::{Component, Effect, HostRequest};
//!
//! let mut tags = TagInput::new().with_items(["rust"]);
//! tags.init();
//! tags.mounted();
//! for effect in tags.update(Message::Focus).into_effects() {
//!     match effect {
//!         Effect::Message(msg) => { /* notify the parent */ }
//!         Effect::Host(HostRequest::FocusInput) => { /* route keys to the tags */ }
//!         Effect::Host(HostRequest::FocusWidget) => {}
//!     }
//! }
//! ```

pub use tagbox_core::*;
pub mod widgets {
    pub use tagbox_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
