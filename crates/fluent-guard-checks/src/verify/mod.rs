//! Object state verification.
//!
//! Operation checks fail with [`FailureKind::InvalidState`]. Disposed checks
//! fail with [`FailureKind::Disposed`] and name the object: an explicit name
//! when one is given, otherwise the subject's type name.
//!
//! ```
//! use fluent_guard_checks::Verify;
//! use fluent_guard_core::{Canonical, DisposableObservable};
//! use std::cell::Cell;
//!
//! #[derive(Debug)]
//! struct Connection {
//!     closed: Cell<bool>,
//! }
//!
//! impl DisposableObservable for Connection {
//!     fn is_disposed(&self) -> bool {
//!         self.closed.get()
//!     }
//! }
//!
//! let conn = Connection { closed: Cell::new(false) };
//! assert!((&conn).verify_observable_not_disposed(Canonical).is_ok());
//!
//! conn.closed.set(true);
//! let err = (&conn).verify_observable_not_disposed(Canonical).unwrap_err();
//! assert!(err.to_string().starts_with("Cannot access a disposed object.\nObject name: '"));
//! ```

use fluent_guard_core::subject::display_type_name;
use fluent_guard_core::{
    Canonical, DisposableObservable, FailureKind, GuardError, GuardResult, MessageProducer,
    RenderContext,
};

use crate::evaluate::{pass_if, pass_when};

fn invalid_state<M: MessageProducer>(message: M) -> GuardError {
    GuardError::builder(FailureKind::InvalidState)
        .message(message)
        .build()
}

fn disposed<M: MessageProducer>(context: RenderContext<'_>, message: M) -> GuardError {
    GuardError::builder(FailureKind::Disposed)
        .message(message)
        .context(context)
        .build()
}

/// Fails with [`FailureKind::InvalidState`] unless `condition` holds.
pub fn operation<M: MessageProducer>(condition: bool, message: M) -> GuardResult<bool> {
    pass_if(condition, condition, || invalid_state(message))
}

/// Always returns an [`FailureKind::InvalidState`] failure.
pub fn fail_operation<M: MessageProducer>(message: M) -> GuardError {
    invalid_state(message)
}

/// Fails with [`FailureKind::Disposed`] naming `object_name` unless
/// `condition` holds. `condition` is true while the object is live.
pub fn not_disposed(condition: bool, object_name: &str) -> GuardResult<bool> {
    pass_if(condition, condition, || {
        disposed(RenderContext::object(object_name), Canonical)
    })
}

/// Chained state checks. Every method except the `fail` forms returns the
/// receiver unchanged when its check passes.
pub trait Verify: Sized {
    /// Fails with [`FailureKind::InvalidState`] unless `condition` accepts
    /// the receiver.
    fn verify_operation<F, M>(self, condition: F, message: M) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        pass_when(self, condition, || invalid_state(message))
    }

    /// See [`fail_operation`]. The receiver only roots the call.
    fn verify_fail_operation<M: MessageProducer>(&self, message: M) -> GuardError {
        fail_operation(message)
    }

    /// Returns the failure [`verify_fail_operation`](Verify::verify_fail_operation)
    /// would, unless `condition` accepts the receiver.
    fn verify_fail_operation_unless<F, M>(&self, condition: F, message: M) -> Option<GuardError>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        (!condition(self)).then(|| invalid_state(message))
    }

    /// Fails naming `object_name` unless `condition` reports the receiver
    /// live. An empty `object_name` names the receiver's type instead.
    fn verify_not_disposed_named<F>(self, object_name: &str, condition: F) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
    {
        pass_when(self, condition, || {
            let context =
                RenderContext::object_or_type(Some(object_name), display_type_name::<Self>());
            disposed(context, Canonical)
        })
    }

    /// Fails naming the receiver's type unless `condition` reports the
    /// receiver live.
    fn verify_value_not_disposed<F, M>(self, condition: F, message: M) -> GuardResult<Self>
    where
        F: FnOnce(&Self) -> bool,
        M: MessageProducer,
    {
        pass_when(self, condition, || {
            disposed(RenderContext::object(display_type_name::<Self>()), message)
        })
    }

    /// Fails if the receiver reports itself disposed.
    fn verify_observable_not_disposed<M>(self, message: M) -> GuardResult<Self>
    where
        Self: DisposableObservable,
        M: MessageProducer,
    {
        let object_name = self.object_name();
        pass_when(self, |v| !v.is_disposed(), || {
            disposed(RenderContext::object(object_name), message)
        })
    }
}

impl<T> Verify for T {}
