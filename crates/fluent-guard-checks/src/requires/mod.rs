//! Preconditions on caller-supplied arguments.
//!
//! Argument failures carry the argument name and render it on the second
//! line of the message. Free functions take a precomputed condition or the
//! argument itself; [`Requires`] provides the same checks as chained methods.
//!
//! ```
//! use fluent_guard_checks::Requires;
//! use fluent_guard_core::{Canonical, FailureKind};
//!
//! let name = String::from("Ada")
//!     .requires_not_null_or_white_space("name")
//!     .and_then(|n| n.requires_that(|n| n.len() < 16, "name", Canonical))
//!     .unwrap();
//! assert_eq!(name, "Ada");
//!
//! let err = None::<&str>.requires_not_null("name").unwrap_err();
//! assert_eq!(err.kind(), FailureKind::NullArgument);
//! assert_eq!(err.to_string(), "Value cannot be null.\nParameter name: name");
//! ```

use fluent_guard_core::subject::display_type_name;
use fluent_guard_core::{
    BoxError, Emptiable, Enumeration, FailureKind, GuardError, GuardResult, MessageProducer,
    Nullable, NullableItems, Presence, Text,
};

use crate::evaluate::{pass_if, pass_when};

fn argument_failure<M: MessageProducer>(
    kind: FailureKind,
    argument_name: &str,
    message: M,
) -> GuardError {
    GuardError::builder(kind)
        .message(message)
        .argument_name(argument_name)
        .build()
}

fn presence_failure<S: Emptiable + ?Sized>(value: &S) -> Option<FailureKind> {
    match value.presence() {
        Presence::Null => Some(FailureKind::NullArgument),
        Presence::Empty => Some(S::EMPTY_KIND),
        Presence::Populated => None,
    }
}

fn text_failure<S: Text + ?Sized>(value: &S) -> Option<FailureKind> {
    match value.text() {
        None => Some(FailureKind::NullArgument),
        Some(text) if text.is_empty() || text.starts_with('\0') => Some(FailureKind::EmptyString),
        Some(text) if text.chars().all(char::is_whitespace) => {
            Some(FailureKind::WhiteSpaceString)
        }
        Some(_) => None,
    }
}

fn items_failure<S: NullableItems + ?Sized>(values: &S) -> Option<FailureKind> {
    presence_failure(values).or_else(|| {
        values
            .any_null()
            .then_some(FailureKind::NullElementInCollection)
    })
}

fn with_kind<T>(
    subject: T,
    failure: Option<FailureKind>,
    argument_name: &str,
) -> GuardResult<T> {
    match failure {
        None => Ok(subject),
        Some(kind) => Err(GuardError::argument(kind, argument_name)),
    }
}

/// Fails with [`FailureKind::InvalidArgument`] unless `condition` holds.
pub fn argument<M: MessageProducer>(
    condition: bool,
    argument_name: &str,
    message: M,
) -> GuardResult<bool> {
    pass_if(condition, condition, || {
        argument_failure(FailureKind::InvalidArgument, argument_name, message)
    })
}

/// Same as [`argument`].
pub fn that<M: MessageProducer>(
    condition: bool,
    argument_name: &str,
    message: M,
) -> GuardResult<bool> {
    argument(condition, argument_name, message)
}

/// Fails with [`FailureKind::OutOfRange`] unless `condition` holds.
pub fn range<M: MessageProducer>(
    condition: bool,
    argument_name: &str,
    message: M,
) -> GuardResult<bool> {
    pass_if(condition, condition, || {
        argument_failure(FailureKind::OutOfRange, argument_name, message)
    })
}

/// Fails with [`FailureKind::InvalidState`] unless `condition` holds.
pub fn valid_state<M: MessageProducer>(condition: bool, message: M) -> GuardResult<bool> {
    pass_if(condition, condition, || {
        GuardError::builder(FailureKind::InvalidState)
            .message(message)
            .build()
    })
}

/// Fails with [`FailureKind::NullArgument`] if `value` is absent.
pub fn not_null<T: Nullable>(value: T, argument_name: &str) -> GuardResult<T> {
    pass_when(
        value,
        |v| !v.is_null(),
        || GuardError::argument(FailureKind::NullArgument, argument_name),
    )
}

/// Fails if `value` is absent or empty.
///
/// Empty collections report [`FailureKind::EmptyCollectionArgument`], empty
/// strings [`FailureKind::EmptyString`].
pub fn not_null_or_empty<S: Emptiable>(value: S, argument_name: &str) -> GuardResult<S> {
    let failure = presence_failure(&value);
    with_kind(value, failure, argument_name)
}

/// Fails if `value` is absent, empty, or consists only of white space.
pub fn not_null_or_white_space<S: Text>(value: S, argument_name: &str) -> GuardResult<S> {
    let failure = text_failure(&value);
    with_kind(value, failure, argument_name)
}

/// Fails if `values` is absent, empty, or holds an absent element.
pub fn not_null_empty_or_null_elements<S: NullableItems>(
    values: S,
    argument_name: &str,
) -> GuardResult<S> {
    let failure = items_failure(&values);
    with_kind(values, failure, argument_name)
}

/// Accepts an absent sequence; fails if a present one holds an absent element.
pub fn null_or_not_null_elements<S: NullableItems>(
    values: S,
    argument_name: &str,
) -> GuardResult<S> {
    let failure = values
        .any_null()
        .then_some(FailureKind::NullElementInCollection);
    with_kind(values, failure, argument_name)
}

/// Fails with [`FailureKind::NotDefaultArgument`] if `value` equals
/// `T::default()`.
pub fn not_default<T: Default + PartialEq>(value: T, argument_name: &str) -> GuardResult<T> {
    pass_when(
        value,
        |v| *v != T::default(),
        || {
            GuardError::builder(FailureKind::NotDefaultArgument)
                .argument_name(argument_name)
                .type_name(display_type_name::<T>())
                .build()
        },
    )
}

/// Fails with [`FailureKind::NotDefinedEnum`] if `value` is not a defined
/// value of its enum.
pub fn defined<E: Enumeration>(value: E, argument_name: &str) -> GuardResult<E> {
    pass_when(value, E::is_defined, || {
        GuardError::builder(FailureKind::NotDefinedEnum)
            .argument_name(argument_name)
            .type_name(E::ENUM_NAME)
            .build()
    })
}

/// Always returns an [`FailureKind::InvalidArgument`] failure naming no argument.
pub fn fail<M: MessageProducer>(message: M) -> GuardError {
    GuardError::builder(FailureKind::InvalidArgument)
        .message(message)
        .build()
}

/// Like [`fail`], wrapping `source` as the prior failure.
pub fn fail_with<E, M>(source: E, message: M) -> GuardError
where
    E: Into<BoxError>,
    M: MessageProducer,
{
    GuardError::builder(FailureKind::InvalidArgument)
        .message(message)
        .source(source)
        .build()
}

/// Fails with [`FailureKind::OutOfRange`] unless `evaluate` accepts `value`.
///
/// The offending value is not captured; see [`GuardError::actual_value`].
pub fn fail_range<T, F, M>(
    value: T,
    argument_name: &str,
    evaluate: F,
    message: M,
) -> GuardResult<T>
where
    F: FnOnce(&T) -> bool,
    M: MessageProducer,
{
    pass_when(value, evaluate, || {
        argument_failure(FailureKind::OutOfRange, argument_name, message)
    })
}

/// Chained preconditions. Every method returns the receiver unchanged when
/// its check passes.
pub trait Requires: Sized {
    /// Predicate form of [`argument`].
    fn requires_argument<F, M>(
        self,
        condition: F,
        argument_name: &str,
        message: M,
    ) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        pass_when(self, condition, || {
            argument_failure(FailureKind::InvalidArgument, argument_name, message)
        })
    }

    /// Predicate form of [`that`].
    fn requires_that<F, M>(
        self,
        condition: F,
        argument_name: &str,
        message: M,
    ) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        self.requires_argument(condition, argument_name, message)
    }

    /// Predicate form of [`range`].
    fn requires_range<F, M>(
        self,
        condition: F,
        argument_name: &str,
        message: M,
    ) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        fail_range(self, argument_name, condition, message)
    }

    /// Predicate form of [`valid_state`].
    fn requires_valid_state<F, M>(self, condition: F, message: M) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        pass_when(self, condition, || {
            GuardError::builder(FailureKind::InvalidState)
                .message(message)
                .build()
        })
    }

    fn requires_not_null(self, argument_name: &str) -> GuardResult<Self>
    where
        Self: Nullable,
    {
        not_null(self, argument_name)
    }

    fn requires_not_null_or_empty(self, argument_name: &str) -> GuardResult<Self>
    where
        Self: Emptiable,
    {
        not_null_or_empty(self, argument_name)
    }

    fn requires_not_null_or_white_space(self, argument_name: &str) -> GuardResult<Self>
    where
        Self: Text,
    {
        not_null_or_white_space(self, argument_name)
    }

    fn requires_not_null_empty_or_null_elements(self, argument_name: &str) -> GuardResult<Self>
    where
        Self: NullableItems,
    {
        not_null_empty_or_null_elements(self, argument_name)
    }

    fn requires_null_or_not_null_elements(self, argument_name: &str) -> GuardResult<Self>
    where
        Self: NullableItems,
    {
        null_or_not_null_elements(self, argument_name)
    }

    fn requires_not_default(self, argument_name: &str) -> GuardResult<Self>
    where
        Self: Default + PartialEq,
    {
        not_default(self, argument_name)
    }

    fn requires_defined(self, argument_name: &str) -> GuardResult<Self>
    where
        Self: Enumeration,
    {
        defined(self, argument_name)
    }

    /// See [`fail`]. The receiver only roots the call.
    fn requires_fail<M: MessageProducer>(&self, message: M) -> GuardError {
        fail(message)
    }

    /// See [`fail_with`]. The receiver only roots the call.
    fn requires_fail_with<E, M>(&self, source: E, message: M) -> GuardError
    where
        E: Into<BoxError>,
        M: MessageProducer,
    {
        fail_with(source, message)
    }

    /// See [`fail_range`].
    fn requires_fail_range<F, M>(
        self,
        argument_name: &str,
        evaluate: F,
        message: M,
    ) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        fail_range(self, argument_name, evaluate, message)
    }
}

impl<T> Requires for T {}

#[cfg(test)]
mod tests;
