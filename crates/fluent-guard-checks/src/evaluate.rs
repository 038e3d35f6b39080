//! Evaluation shape shared by every family.

use fluent_guard_core::{GuardError, GuardResult};

/// Returns `subject` when `holds`, otherwise the failure built by `fail`.
#[inline]
pub(crate) fn pass_if<T>(
    subject: T,
    holds: bool,
    fail: impl FnOnce() -> GuardError,
) -> GuardResult<T> {
    if holds {
        Ok(subject)
    } else {
        Err(fail())
    }
}

/// Evaluates `condition` once against `subject`, then behaves as [`pass_if`].
#[inline]
pub(crate) fn pass_when<T>(
    subject: T,
    condition: impl FnOnce(&T) -> bool,
    fail: impl FnOnce() -> GuardError,
) -> GuardResult<T> {
    let holds = condition(&subject);
    pass_if(subject, holds, fail)
}
