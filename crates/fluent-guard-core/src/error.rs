//! Failure signal raised by guards.

use std::error::Error as StdError;

use thiserror::Error;

use crate::kind::{FailureKind, TerminationClass};
use crate::message::{produce_non_empty, MessageProducer};
use crate::render::{fill, render, RenderContext};

/// A wrapped prior failure.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The failure produced by a guard whose condition did not hold.
///
/// Carries the kind, the fully rendered message, the offending argument name
/// for argument failures, and an optional wrapped prior failure available
/// through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GuardError {
    kind: FailureKind,
    message: String,
    argument_name: Option<String>,
    actual_value: Option<String>,
    #[source]
    source: Option<BoxError>,
}

/// Result type alias for guard evaluations.
pub type GuardResult<T> = std::result::Result<T, GuardError>;

impl GuardError {
    /// Starts building a failure of `kind`.
    pub fn builder<'a>(kind: FailureKind) -> GuardErrorBuilder<'a> {
        GuardErrorBuilder {
            kind,
            message: None,
            argument_name: None,
            object_name: None,
            type_name: None,
            source: None,
        }
    }

    /// An argument failure with the kind's canonical message.
    pub fn argument(kind: FailureKind, argument_name: &str) -> Self {
        Self::builder(kind).argument_name(argument_name).build()
    }

    /// Returns the failure kind.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the termination class of the failure kind.
    pub fn termination(&self) -> TerminationClass {
        self.kind.termination()
    }

    /// Returns the rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending argument name, if the failure names one.
    pub fn argument_name(&self) -> Option<&str> {
        self.argument_name.as_deref()
    }

    /// Returns the offending value of an out-of-range failure.
    ///
    /// Guards never capture the value, so this is always `None`.
    pub fn actual_value(&self) -> Option<&str> {
        self.actual_value.as_deref()
    }

    /// Returns true if a prior failure is wrapped.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Consumes the failure, returning the wrapped prior failure.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }
}

/// Builder for [`GuardError`].
///
/// The base message is the caller's message when one was produced, otherwise
/// the kind's template with `{name}` and `{type}` filled in. The base is then
/// rendered with the argument name or object name.
pub struct GuardErrorBuilder<'a> {
    kind: FailureKind,
    message: Option<String>,
    argument_name: Option<&'a str>,
    object_name: Option<&'a str>,
    type_name: Option<&'a str>,
    source: Option<BoxError>,
}

impl<'a> GuardErrorBuilder<'a> {
    /// Uses the producer's message as the base, if it produces one.
    pub fn message<M: MessageProducer>(mut self, producer: M) -> Self {
        self.message = produce_non_empty(producer);
        self
    }

    /// Names the offending argument.
    pub fn argument_name(mut self, name: &'a str) -> Self {
        self.argument_name = Some(name);
        self
    }

    /// Names the object the failure concerns.
    pub fn object_name(mut self, name: &'a str) -> Self {
        self.object_name = Some(name);
        self
    }

    /// Takes the argument and object names from a render context.
    pub fn context(mut self, context: RenderContext<'a>) -> Self {
        self.argument_name = context.argument_name;
        self.object_name = context.object_name;
        self
    }

    /// Supplies the type name used by `{type}` placeholders.
    pub fn type_name(mut self, name: &'a str) -> Self {
        self.type_name = Some(name);
        self
    }

    /// Wraps a prior failure.
    pub fn source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Renders the message and creates the failure.
    ///
    /// An empty argument name is treated as absent, matching [`render`].
    pub fn build(self) -> GuardError {
        let argument_name = self.argument_name.filter(|n| !n.is_empty());
        let base = match self.message {
            Some(message) => message,
            None => fill(self.kind.template(), argument_name, self.type_name),
        };
        let context = RenderContext {
            argument_name,
            object_name: self.object_name,
        };
        let message = render(&base, &context);

        tracing::debug!(
            kind = ?self.kind,
            argument = argument_name,
            "guard failed"
        );

        GuardError {
            kind: self.kind,
            message,
            argument_name: argument_name.map(str::to_owned),
            actual_value: None,
            source: self.source,
        }
    }
}
