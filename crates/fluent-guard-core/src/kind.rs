//! Failure taxonomy.
//!
//! Every failed guard is attributed to exactly one [`FailureKind`]. The kind
//! decides the canonical message used when the caller supplies no override,
//! and the [`TerminationClass`] that tells callers how the failure relates to
//! their own inputs.

use std::fmt;

/// Message shared by every internal-assumption failure that carries no
/// caller-supplied text.
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An internal error occurred. Please contact customer support.";

/// How a failure kind terminates the enclosing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TerminationClass {
    /// A caller-supplied argument was rejected; the argument name is reported.
    ArgumentInvalid,

    /// Object or program state was rejected; no argument is attributed.
    StateInvalid,

    /// Raised unconditionally from a code path that must never execute.
    AlwaysFail,
}

/// The closed set of failure kinds a guard can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    /// A required value was absent.
    NullArgument,

    /// A sequence argument had no elements.
    EmptyCollectionArgument,

    /// A sequence argument contained an absent element.
    NullElementInCollection,

    /// A string argument was empty or started with the NUL character.
    EmptyString,

    /// A string argument consisted entirely of white space.
    WhiteSpaceString,

    /// A value argument equalled its type's default.
    NotDefaultArgument,

    /// An enum argument held a value the enum does not define.
    NotDefinedEnum,

    /// A generic argument condition did not hold.
    InvalidArgument,

    /// An argument fell outside its accepted range.
    OutOfRange,

    /// The operation is not valid for the current state.
    InvalidState,

    /// The object has already been disposed.
    Disposed,

    /// An internal assumption did not hold.
    FailedAssumption,

    /// A value could not be viewed as the requested type.
    TypeMismatch,

    /// A required collaborator was not present.
    MissingComponent,

    /// A code path that must never execute was reached.
    Unreachable,
}

impl FailureKind {
    /// Every kind, in declaration order.
    pub const ALL: [FailureKind; 15] = [
        FailureKind::NullArgument,
        FailureKind::EmptyCollectionArgument,
        FailureKind::NullElementInCollection,
        FailureKind::EmptyString,
        FailureKind::WhiteSpaceString,
        FailureKind::NotDefaultArgument,
        FailureKind::NotDefinedEnum,
        FailureKind::InvalidArgument,
        FailureKind::OutOfRange,
        FailureKind::InvalidState,
        FailureKind::Disposed,
        FailureKind::FailedAssumption,
        FailureKind::TypeMismatch,
        FailureKind::MissingComponent,
        FailureKind::Unreachable,
    ];

    /// Returns the canonical message template for this kind.
    ///
    /// Templates may contain `{name}` (argument name) and `{type}` (type
    /// name) placeholders; see [`crate::render::fill`].
    pub const fn template(self) -> &'static str {
        match self {
            FailureKind::NullArgument => "Value cannot be null.",
            FailureKind::EmptyCollectionArgument => "'{name}' must contain at least one element.",
            FailureKind::NullElementInCollection => "'{name}' cannot contain a null element.",
            FailureKind::EmptyString => {
                "'{name}' cannot be an empty string (\"\") or start with the null character."
            }
            FailureKind::WhiteSpaceString => {
                "The parameter \"{name}\" cannot consist entirely of white space characters."
            }
            FailureKind::NotDefaultArgument => {
                "'{name}' cannot be the default value defined by '{type}'."
            }
            FailureKind::NotDefinedEnum => {
                "'{name}' must be set to a value defined by the enum '{type}'."
            }
            FailureKind::InvalidArgument => "Value does not fall within the expected range.",
            FailureKind::OutOfRange => "Specified argument was out of the range of valid values.",
            FailureKind::InvalidState => {
                "Operation is not valid due to the current state of the object."
            }
            FailureKind::Disposed => "Cannot access a disposed object.",
            FailureKind::MissingComponent => "Cannot find an instance of the '{type}' service.",
            FailureKind::FailedAssumption | FailureKind::TypeMismatch | FailureKind::Unreachable => {
                INTERNAL_ERROR_MESSAGE
            }
        }
    }

    /// Returns the termination class of this kind.
    pub const fn termination(self) -> TerminationClass {
        match self {
            FailureKind::NullArgument
            | FailureKind::EmptyCollectionArgument
            | FailureKind::NullElementInCollection
            | FailureKind::EmptyString
            | FailureKind::WhiteSpaceString
            | FailureKind::NotDefaultArgument
            | FailureKind::NotDefinedEnum
            | FailureKind::InvalidArgument
            | FailureKind::OutOfRange => TerminationClass::ArgumentInvalid,
            FailureKind::InvalidState
            | FailureKind::Disposed
            | FailureKind::FailedAssumption
            | FailureKind::TypeMismatch
            | FailureKind::MissingComponent => TerminationClass::StateInvalid,
            FailureKind::Unreachable => TerminationClass::AlwaysFail,
        }
    }

    /// Returns true if failures of this kind report the offending argument.
    pub const fn is_argument_invalid(self) -> bool {
        matches!(self.termination(), TerminationClass::ArgumentInvalid)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::NullArgument => "null argument",
            FailureKind::EmptyCollectionArgument => "empty collection argument",
            FailureKind::NullElementInCollection => "null element in collection",
            FailureKind::EmptyString => "empty string",
            FailureKind::WhiteSpaceString => "white space string",
            FailureKind::NotDefaultArgument => "default argument",
            FailureKind::NotDefinedEnum => "undefined enum value",
            FailureKind::InvalidArgument => "invalid argument",
            FailureKind::OutOfRange => "argument out of range",
            FailureKind::InvalidState => "invalid state",
            FailureKind::Disposed => "disposed object",
            FailureKind::FailedAssumption => "failed assumption",
            FailureKind::TypeMismatch => "type mismatch",
            FailureKind::MissingComponent => "missing component",
            FailureKind::Unreachable => "unreachable code",
        };
        f.write_str(name)
    }
}
