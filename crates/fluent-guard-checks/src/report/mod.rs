//! Best-effort checks.
//!
//! Report checks never fail. A failed condition appends its message to the
//! caller's [`ReportSink`] and execution continues. Without a caller message
//! the internal-error message is recorded.

mod sink;

pub use sink::{
    sink_from_config, ConfiguredSink, DiscardSink, MemorySink, ReportSink, ReportedMessage,
    Severity, TracingSink,
};

use fluent_guard_core::message::produce_non_empty;
use fluent_guard_core::render::fill;
use fluent_guard_core::{FailureKind, MessageProducer, Nullable, INTERNAL_ERROR_MESSAGE};

fn notify<S, M>(sink: &S, message: M, severity: Severity)
where
    S: ReportSink + ?Sized,
    M: MessageProducer,
{
    let message = produce_non_empty(message).unwrap_or_else(|| INTERNAL_ERROR_MESSAGE.to_owned());
    tracing::trace!(?severity, "reporting guard message");
    sink.record(&message, severity);
}

fn missing_component<S, T>(sink: &S, component: &T)
where
    S: ReportSink + ?Sized,
    T: Nullable + ?Sized,
{
    let message = fill(
        FailureKind::MissingComponent.template(),
        None,
        Some(component.component_type_name()),
    );
    sink.record(&message, Severity::Recoverable);
}

/// Records `message` as a fatal report.
pub fn fail<S, M>(sink: &S, message: M)
where
    S: ReportSink + ?Sized,
    M: MessageProducer,
{
    notify(sink, message, Severity::Fatal);
}

/// Records `message` if `condition` holds, returning `condition`.
pub fn report_if<S, M>(sink: &S, condition: bool, message: M) -> bool
where
    S: ReportSink + ?Sized,
    M: MessageProducer,
{
    if condition {
        notify(sink, message, Severity::Recoverable);
    }
    condition
}

/// Records `message` unless `condition` holds, returning `condition`.
pub fn report_if_not<S, M>(sink: &S, condition: bool, message: M) -> bool
where
    S: ReportSink + ?Sized,
    M: MessageProducer,
{
    report_if(sink, !condition, message);
    condition
}

/// Records a missing-component message if `component` is absent, returning
/// `component`.
pub fn if_not_present<S, T>(sink: &S, component: T) -> T
where
    S: ReportSink + ?Sized,
    T: Nullable,
{
    if component.is_null() {
        missing_component(sink, &component);
    }
    component
}

/// Chained best-effort checks. Every method returns the receiver.
pub trait Report: Sized {
    /// See [`fail`].
    fn report_fail<S, M>(self, sink: &S, message: M) -> Self
    where
        S: ReportSink + ?Sized,
        M: MessageProducer,
    {
        fail(sink, message);
        self
    }

    /// Records `message` if `condition` accepts the receiver.
    fn report_if<S, F, M>(self, sink: &S, condition: F, message: M) -> Self
    where
        S: ReportSink + ?Sized,
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        let holds = condition(&self);
        report_if(sink, holds, message);
        self
    }

    /// Records `message` unless `condition` accepts the receiver.
    fn report_if_not<S, F, M>(self, sink: &S, condition: F, message: M) -> Self
    where
        S: ReportSink + ?Sized,
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        let holds = condition(&self);
        report_if_not(sink, holds, message);
        self
    }

    /// See [`if_not_present`].
    fn report_if_not_present<S>(self, sink: &S) -> Self
    where
        S: ReportSink + ?Sized,
        Self: Nullable,
    {
        if_not_present(sink, self)
    }
}

impl<T> Report for T {}

#[cfg(test)]
mod tests;
