//! fluent-guard core - failure taxonomy, message rendering and subject
//! capabilities.
//!
//! This crate provides the pieces every guard family shares:
//! - [`kind`] - the closed set of failure kinds and their canonical messages
//! - [`error`] - the failure signal raised by guards
//! - [`render`] - the two-line message layout
//! - [`message`] - lazily produced caller messages
//! - [`subject`] - capabilities a guarded value must have for a given check

#[macro_use]
mod macros;

pub mod error;
pub mod kind;
pub mod message;
pub mod render;
pub mod subject;

pub use error::{BoxError, GuardError, GuardErrorBuilder, GuardResult};
pub use kind::{FailureKind, TerminationClass, INTERNAL_ERROR_MESSAGE};
pub use message::{Canonical, MessageProducer};
pub use render::{render, RenderContext};
pub use subject::{
    DisposableObservable, Emptiable, Enumeration, Nullable, NullableItems, Presence, Text,
};
