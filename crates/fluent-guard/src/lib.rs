//! fluent-guard - guard clauses that return their subject.
//!
//! Four families share one evaluation shape: a passing check returns the
//! subject unchanged, a failing one produces a [`GuardError`] with a
//! deterministic message, or, for [`report`], records the message in a
//! caller-owned sink.
//!
//! # Example
//!
//! ```rust
//! use fluent_guard::prelude::*;
//!
//! fn connect(host: Option<&str>, port: u16) -> GuardResult<String> {
//!     let host = host
//!         .requires_not_null("host")?
//!         .requires_not_null_or_white_space("host")?;
//!     let port = port.requires_range(|p| *p >= 1024, "port", Canonical)?;
//!     Ok(format!("{}:{port}", host.unwrap_or_default()))
//! }
//!
//! assert_eq!(connect(Some("db"), 5432).unwrap(), "db:5432");
//!
//! let err = connect(None, 5432).unwrap_err();
//! assert_eq!(err.kind(), FailureKind::NullArgument);
//! assert_eq!(err.to_string(), "Value cannot be null.\nParameter name: host");
//! ```

// Failure taxonomy and rendering
pub use fluent_guard_core::{
    defined_enum, render, BoxError, Canonical, FailureKind, GuardError, GuardErrorBuilder,
    GuardResult, MessageProducer, RenderContext, TerminationClass, INTERNAL_ERROR_MESSAGE,
};

// Subject capabilities
pub use fluent_guard_core::subject;
pub use fluent_guard_core::{
    DisposableObservable, Emptiable, Enumeration, Nullable, NullableItems, Presence, Text,
};

// Guard families
pub use fluent_guard_checks::{assumes, report, requires, verify};
pub use fluent_guard_checks::{Assumes, AssumesIs, Report, Requires, Verify};

// Report sinks and configured environment
pub use fluent_guard_checks::{
    sink_from_config, ConfiguredSink, DiscardSink, GuardContext, MemorySink, ReportSink,
    ReportedMessage, Severity, TracingSink,
};

// Configuration
pub use fluent_guard_config::{
    AssumesConfig, ConfigError, GuardConfig, ReportConfig, ReportLevel, SinkKind,
};

pub mod prelude {
    pub use super::{Assumes, AssumesIs, Report, Requires, Verify};
    pub use super::{Canonical, FailureKind, GuardError, GuardResult};
    pub use super::{DisposableObservable, Enumeration};
    pub use super::{MemorySink, ReportSink};
}
