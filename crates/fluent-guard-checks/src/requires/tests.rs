//! Tests for preconditions.

use std::cell::Cell;
use std::collections::HashMap;
use std::error::Error as _;
use std::io;

use fluent_guard_core::{Canonical, FailureKind, TerminationClass};
use fluent_guard_test::{argument_message, Fruit, ARGUMENT_NAME, THIS_IS_A_TEST};
use proptest::prelude::*;

use super::*;

#[test]
fn test_not_null_fails_with_argument_name() {
    let err = not_null(None::<String>, ARGUMENT_NAME).unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullArgument);
    assert_eq!(err.termination(), TerminationClass::ArgumentInvalid);
    assert_eq!(err.argument_name(), Some(ARGUMENT_NAME));
    assert_eq!(err.message(), "Value cannot be null.\nParameter name: arg");
}

#[test]
fn test_not_null_returns_subject() {
    let value = Some(String::from("value"));
    assert_eq!(value.clone().requires_not_null(ARGUMENT_NAME).unwrap(), value);

    let borrowed = &value;
    let out = borrowed.requires_not_null(ARGUMENT_NAME).unwrap();
    assert!(std::ptr::eq(out, borrowed));
}

#[test]
fn test_not_null_or_empty_collections() {
    let err = None::<Vec<i32>>
        .requires_not_null_or_empty(ARGUMENT_NAME)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullArgument);

    let err = Vec::<i32>::new()
        .requires_not_null_or_empty(ARGUMENT_NAME)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::EmptyCollectionArgument);
    assert_eq!(
        err.message(),
        argument_message("'arg' must contain at least one element.")
    );

    let map: HashMap<&str, i32> = HashMap::new();
    assert_eq!(
        not_null_or_empty(&map, ARGUMENT_NAME).unwrap_err().kind(),
        FailureKind::EmptyCollectionArgument
    );

    let values = [1, 2, 3];
    let out = values.requires_not_null_or_empty(ARGUMENT_NAME).unwrap();
    assert_eq!(out, [1, 2, 3]);
}

#[test]
fn test_not_null_or_empty_strings() {
    let err = "".requires_not_null_or_empty(ARGUMENT_NAME).unwrap_err();
    assert_eq!(err.kind(), FailureKind::EmptyString);
    assert_eq!(
        err.message(),
        argument_message("'arg' cannot be an empty string (\"\") or start with the null character.")
    );

    let err = "\0tail".requires_not_null_or_empty(ARGUMENT_NAME).unwrap_err();
    assert_eq!(err.kind(), FailureKind::EmptyString);

    assert_eq!("  ".requires_not_null_or_empty(ARGUMENT_NAME).unwrap(), "  ");
}

#[test]
fn test_not_null_or_white_space() {
    let err = None::<String>
        .requires_not_null_or_white_space(ARGUMENT_NAME)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullArgument);

    let empty = not_null_or_white_space("", ARGUMENT_NAME).unwrap_err();
    assert_eq!(empty.kind(), FailureKind::EmptyString);

    let blank = not_null_or_white_space(" \t\r\n", ARGUMENT_NAME).unwrap_err();
    assert_eq!(blank.kind(), FailureKind::WhiteSpaceString);
    assert_eq!(
        blank.message(),
        argument_message(
            "The parameter \"arg\" cannot consist entirely of white space characters."
        )
    );
    assert_ne!(empty.message(), blank.message());

    assert_eq!(
        String::from(" x ")
            .requires_not_null_or_white_space(ARGUMENT_NAME)
            .unwrap(),
        " x "
    );
}

#[test]
fn test_null_elements() {
    let err = vec![Some(1), None]
        .requires_not_null_empty_or_null_elements(ARGUMENT_NAME)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullElementInCollection);
    assert_eq!(
        err.message(),
        argument_message("'arg' cannot contain a null element.")
    );

    let err = Vec::<Option<i32>>::new()
        .requires_not_null_empty_or_null_elements(ARGUMENT_NAME)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::EmptyCollectionArgument);

    let err = None::<Vec<Option<i32>>>
        .requires_not_null_empty_or_null_elements(ARGUMENT_NAME)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullArgument);

    assert!(vec![Some(1)]
        .requires_not_null_empty_or_null_elements(ARGUMENT_NAME)
        .is_ok());
}

#[test]
fn test_null_or_not_null_elements() {
    assert!(None::<Vec<Option<i32>>>
        .requires_null_or_not_null_elements(ARGUMENT_NAME)
        .is_ok());
    assert!(Vec::<Option<i32>>::new()
        .requires_null_or_not_null_elements(ARGUMENT_NAME)
        .is_ok());

    let err = [Some("a"), None]
        .requires_null_or_not_null_elements(ARGUMENT_NAME)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NullElementInCollection);
}

#[test]
fn test_not_default() {
    let err = 0i32.requires_not_default(ARGUMENT_NAME).unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotDefaultArgument);
    assert_eq!(
        err.message(),
        argument_message("'arg' cannot be the default value defined by 'i32'.")
    );
    assert_eq!(7i32.requires_not_default(ARGUMENT_NAME).unwrap(), 7);

    let err = not_default(Fruit::default(), ARGUMENT_NAME).unwrap_err();
    assert!(err.message().contains("Fruit"));

    let err = not_default(0i32, "{type}").unwrap_err();
    assert_eq!(
        err.message(),
        "'{type}' cannot be the default value defined by 'i32'.\nParameter name: {type}"
    );
}

#[test]
fn test_defined_enum() {
    let err = Fruit::from(0).requires_defined(ARGUMENT_NAME).unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotDefinedEnum);
    assert_eq!(
        err.message(),
        "'arg' must be set to a value defined by the enum 'Fruit'.\nParameter name: arg"
    );
    assert_eq!(
        defined(Fruit::Oranges, ARGUMENT_NAME).unwrap(),
        Fruit::Oranges
    );
}

#[test]
fn test_argument_and_that() {
    assert!(argument(true, ARGUMENT_NAME, Canonical).unwrap());

    let err = that(false, ARGUMENT_NAME, || THIS_IS_A_TEST).unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidArgument);
    assert_eq!(err.message(), argument_message(THIS_IS_A_TEST));

    let err = 5i32
        .requires_argument(|v| *v > 10, ARGUMENT_NAME, Canonical)
        .unwrap_err();
    assert_eq!(
        err.message(),
        argument_message("Value does not fall within the expected range.")
    );
    assert_eq!(
        12i32
            .requires_that(|v| *v > 10, ARGUMENT_NAME, Canonical)
            .unwrap(),
        12
    );
}

#[test]
fn test_range() {
    let err = range(false, ARGUMENT_NAME, Canonical).unwrap_err();
    assert_eq!(err.kind(), FailureKind::OutOfRange);
    assert_eq!(err.actual_value(), None);
    assert_eq!(
        err.message(),
        argument_message("Specified argument was out of the range of valid values.")
    );

    let err = 11i32
        .requires_range(|v| (0..10).contains(v), ARGUMENT_NAME, || THIS_IS_A_TEST)
        .unwrap_err();
    assert_eq!(err.message(), argument_message(THIS_IS_A_TEST));

    assert_eq!(
        fail_range(3, ARGUMENT_NAME, |v| *v < 10, Canonical).unwrap(),
        3
    );
    let err = 30i32
        .requires_fail_range(ARGUMENT_NAME, |v| *v < 10, Canonical)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::OutOfRange);
    assert_eq!(err.actual_value(), None);
}

#[test]
fn test_valid_state() {
    assert!(valid_state(true, Canonical).unwrap());

    let err = valid_state(false, || THIS_IS_A_TEST).unwrap_err();
    assert_eq!(err.kind(), FailureKind::InvalidState);
    assert_eq!(err.termination(), TerminationClass::StateInvalid);
    assert_eq!(err.argument_name(), None);
    assert_eq!(err.message(), THIS_IS_A_TEST);

    let err = "open"
        .requires_valid_state(|s| *s == "closed", Canonical)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Operation is not valid due to the current state of the object."
    );
}

#[test]
fn test_fail() {
    let err = fail(|| THIS_IS_A_TEST);
    assert_eq!(err.kind(), FailureKind::InvalidArgument);
    assert_eq!(err.argument_name(), None);
    assert_eq!(err.message(), THIS_IS_A_TEST);
    assert!(!err.has_source());

    let err = "subject".requires_fail(Canonical);
    assert_eq!(err.message(), FailureKind::InvalidArgument.template());
}

#[test]
fn test_fail_with_wraps_source() {
    let inner = io::Error::new(io::ErrorKind::NotFound, "missing file");
    let err = fail_with(inner, || THIS_IS_A_TEST);
    assert_eq!(err.message(), THIS_IS_A_TEST);
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("missing file")
    );

    let err = 1u8.requires_fail_with("prior", || THIS_IS_A_TEST);
    assert!(err.has_source());
}

#[test]
fn test_message_not_produced_on_success() {
    let calls = Cell::new(0);
    let message = || {
        calls.set(calls.get() + 1);
        THIS_IS_A_TEST
    };
    assert!(argument(true, ARGUMENT_NAME, message).is_ok());
    assert_eq!(calls.get(), 0);

    let message = || {
        calls.set(calls.get() + 1);
        THIS_IS_A_TEST
    };
    assert!(argument(false, ARGUMENT_NAME, message).is_err());
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_condition_evaluated_once() {
    let calls = Cell::new(0);
    let _ = "x".requires_that(
        |_| {
            calls.set(calls.get() + 1);
            false
        },
        ARGUMENT_NAME,
        Canonical,
    );
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_chained_checks_return_subject() {
    let values = vec![Some(1), Some(2)];
    let out = values
        .clone()
        .requires_not_null_empty_or_null_elements(ARGUMENT_NAME)
        .and_then(|v| v.requires_that(|v| v.len() == 2, ARGUMENT_NAME, Canonical))
        .and_then(|v| v.requires_not_default(ARGUMENT_NAME))
        .unwrap();
    assert_eq!(out, values);
}

proptest! {
    #[test]
    fn prop_non_empty_sequence_passes_unchanged(values in prop::collection::vec(any::<i64>(), 1..32)) {
        let out = values.clone().requires_not_null_or_empty(ARGUMENT_NAME).unwrap();
        prop_assert_eq!(out, values);
    }

    #[test]
    fn prop_white_space_strings_rejected(text in "[ \t\r\n\u{0C}]{1,16}") {
        let err = not_null_or_white_space(text.as_str(), ARGUMENT_NAME).unwrap_err();
        prop_assert_eq!(err.kind(), FailureKind::WhiteSpaceString);
        prop_assert!(err.message().ends_with("\nParameter name: arg"));
    }
}
