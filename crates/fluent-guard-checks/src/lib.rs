//! Guard families for fluent-guard.
//!
//! Every family evaluates a condition against a subject and either returns
//! the subject unchanged or produces a [`GuardError`](fluent_guard_core::GuardError):
//! - [`requires`] - preconditions on caller-supplied arguments
//! - [`assumes`] - internal invariants and unreachable paths
//! - [`verify`] - object state and disposal
//! - [`report`] - best-effort checks that record instead of failing
//!
//! Each family module holds free functions for boolean conditions and an
//! extension trait, implemented for every sized type, for the fluent forms.

pub mod assumes;
pub mod context;
mod evaluate;
pub mod report;
pub mod requires;
pub mod verify;

pub use assumes::{Assumes, AssumesIs};
pub use context::GuardContext;
pub use report::{
    sink_from_config, ConfiguredSink, DiscardSink, MemorySink, Report, ReportSink,
    ReportedMessage, Severity, TracingSink,
};
pub use requires::Requires;
pub use verify::Verify;
