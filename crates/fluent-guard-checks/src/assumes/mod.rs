//! Internal invariants.
//!
//! Assumptions guard the library's own logic rather than caller input, so
//! their failures name no argument and, without a caller message, render the
//! internal-error message. [`fail`] and [`fail_with`] take a `show_assert`
//! hint that logs the failure at error level before it is returned.

use std::any::Any;

use fluent_guard_core::{
    BoxError, Canonical, Emptiable, FailureKind, GuardError, GuardResult, MessageProducer,
    Nullable, Presence,
};

use crate::evaluate::{pass_if, pass_when};

fn assumption_failure<M: MessageProducer>(message: M) -> GuardError {
    GuardError::builder(FailureKind::FailedAssumption)
        .message(message)
        .build()
}

fn show(error: GuardError, show_assert: bool) -> GuardError {
    if show_assert {
        tracing::error!(
            kind = ?error.kind(),
            detail = error.message(),
            "assumption failed"
        );
    }
    error
}

/// Fails unless `condition` holds.
pub fn true_<M: MessageProducer>(condition: bool, message: M) -> GuardResult<bool> {
    pass_if(condition, condition, || assumption_failure(message))
}

/// Fails if `condition` holds.
pub fn false_<M: MessageProducer>(condition: bool, message: M) -> GuardResult<bool> {
    pass_if(condition, !condition, || assumption_failure(message))
}

/// Fails if `value` is absent.
pub fn not_null<T: Nullable>(value: T) -> GuardResult<T> {
    pass_when(value, |v| !v.is_null(), || assumption_failure(Canonical))
}

/// Fails if `value` is present.
pub fn null<T: Nullable>(value: T) -> GuardResult<T> {
    pass_when(value, |v| v.is_null(), || assumption_failure(Canonical))
}

/// Fails if `value` is absent or empty.
pub fn not_null_or_empty<S: Emptiable>(value: S) -> GuardResult<S> {
    pass_when(
        value,
        |v| v.presence() == Presence::Populated,
        || assumption_failure(Canonical),
    )
}

/// Fails with [`FailureKind::MissingComponent`] if `component` is absent.
///
/// The message names the component's type: `Option<Clock>` reports `Clock`.
pub fn present<T: Nullable>(component: T) -> GuardResult<T> {
    let type_name = component.component_type_name();
    pass_when(component, |c| !c.is_null(), || {
        GuardError::builder(FailureKind::MissingComponent)
            .type_name(type_name)
            .build()
    })
}

/// Views `value` as `U`, failing with [`FailureKind::TypeMismatch`] if it
/// holds another type.
///
/// Pass `&*boxed` rather than `&boxed` for a `Box<dyn Any>`, otherwise the
/// box itself is the value inspected.
pub fn is<U: Any>(value: &dyn Any) -> GuardResult<&U> {
    value.assumes_is::<U>()
}

/// Always returns an [`FailureKind::Unreachable`] failure.
pub fn not_reachable() -> GuardError {
    GuardError::builder(FailureKind::Unreachable).build()
}

/// Always returns a [`FailureKind::FailedAssumption`] failure.
pub fn fail<M: MessageProducer>(message: M, show_assert: bool) -> GuardError {
    show(assumption_failure(message), show_assert)
}

/// Like [`fail`], wrapping `source` as the prior failure.
pub fn fail_with<E, M>(message: M, source: E, show_assert: bool) -> GuardError
where
    E: Into<BoxError>,
    M: MessageProducer,
{
    let error = GuardError::builder(FailureKind::FailedAssumption)
        .message(message)
        .source(source)
        .build();
    show(error, show_assert)
}

fn type_mismatch<U: Any>() -> GuardError {
    tracing::debug!(
        expected = std::any::type_name::<U>(),
        "assumed type did not match"
    );
    GuardError::builder(FailureKind::TypeMismatch).build()
}

/// Runtime type assumptions on type-erased values.
pub trait AssumesIs {
    /// Views the value as `U`.
    fn assumes_is<U: Any>(&self) -> GuardResult<&U>;

    /// Views the value mutably as `U`.
    fn assumes_is_mut<U: Any>(&mut self) -> GuardResult<&mut U>;
}

macro_rules! impl_assumes_is {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AssumesIs for $ty {
                fn assumes_is<U: Any>(&self) -> GuardResult<&U> {
                    self.downcast_ref::<U>().ok_or_else(type_mismatch::<U>)
                }

                fn assumes_is_mut<U: Any>(&mut self) -> GuardResult<&mut U> {
                    self.downcast_mut::<U>().ok_or_else(type_mismatch::<U>)
                }
            }
        )+
    };
}

impl_assumes_is!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

/// Chained assumptions. Every method returns the receiver unchanged when
/// its check passes.
pub trait Assumes: Sized {
    /// Fails unless `condition` accepts the receiver.
    fn assumes_true<F, M>(self, condition: F, message: M) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        pass_when(self, condition, || assumption_failure(message))
    }

    /// Fails if `condition` accepts the receiver.
    fn assumes_false<F, M>(self, condition: F, message: M) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        pass_when(self, |v| !condition(v), || assumption_failure(message))
    }

    fn assumes_not_null(self) -> GuardResult<Self>
    where
        Self: Nullable,
    {
        not_null(self)
    }

    fn assumes_null(self) -> GuardResult<Self>
    where
        Self: Nullable,
    {
        null(self)
    }

    fn assumes_not_null_or_empty(self) -> GuardResult<Self>
    where
        Self: Emptiable,
    {
        not_null_or_empty(self)
    }

    /// See [`present`].
    fn assumes_present(self) -> GuardResult<Self>
    where
        Self: Nullable,
    {
        present(self)
    }

    /// See [`not_reachable`]. The receiver only roots the call.
    fn assumes_not_reachable(&self) -> GuardError {
        not_reachable()
    }

    /// See [`fail`]. The receiver only roots the call.
    fn assumes_fail<M: MessageProducer>(&self, message: M, show_assert: bool) -> GuardError {
        fail(message, show_assert)
    }

    /// See [`fail_with`]. The receiver only roots the call.
    fn assumes_fail_with<E, M>(&self, message: M, source: E, show_assert: bool) -> GuardError
    where
        E: Into<BoxError>,
        M: MessageProducer,
    {
        fail_with(message, source, show_assert)
    }
}

impl<T> Assumes for T {}
