//! The tag input widget for **tagbox**, plus the pieces it is built from.
//!
//! Every component here implements [`tagbox_core::Component`], so it can be
//! driven by any host loop and placed freely within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tag_input`] | Text field that collects entries into a list of tags |
//! | [`dropdown`] | Suggestion menu rendered under an anchor |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`autocomplete`] | Candidate filtering and dropdown wiring |
//! | [`focus`] | [`FocusState`](focus::FocusState): text field, one tag, or neither |
//! | [`keypress`] | Key-to-action table for navigating and deleting tags |
//! | [`listeners`] | Per-event callback registry |
//! | [`text_edit`] | Single-line edit buffer with a cursor |
//! | [`validation`] | Rules a tag must pass before it is added |

pub mod autocomplete;
pub mod dropdown;
pub mod focus;
pub mod keypress;
pub mod listeners;
pub mod tag_input;
pub mod text_edit;
pub mod validation;
