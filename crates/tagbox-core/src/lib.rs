//! Host plumbing for **tagbox** components.
//!
//! `tagbox-core` supplies the small set of types a component needs to live
//! inside a terminal application built on [`ratatui`].  The design follows the
//! [Elm Architecture]: state changes happen in `update`, rendering in `view`,
//! and side effects are returned as [`Command`] values for the host to carry
//! out.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Renderable sub-model with lifecycle hooks |
//! | [`Command`] | Messages and [`HostRequest`]s a component asks the host to run |
//! | [`Bound`] | Observable value for two-way binding with the host |
//! | [`ComponentHarness`](testing::ComponentHarness) | Headless harness for unit-testing a component |
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod binding;
pub mod command;
pub mod component;
pub mod testing;

pub use binding::{Bound, ObserverId};
pub use command::{Command, Effect, HostRequest};
pub use component::Component;
