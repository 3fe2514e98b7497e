//! Domain-specific assertion helpers for oar harnesses.
//!
//! These add context-rich failure messages that make it clear which record
//! invariant was violated, instead of a bare enum mismatch.

use oar_core::Error;

/// Assert an error is `InvalidInput` for the expected payload kind.
pub fn assert_invalid_input(err: &Error, expected: &'static str) {
    match err {
        Error::InvalidInput {
            expected: actual, ..
        } if *actual == expected => {}
        other => panic!(
            "expected InvalidInput for {expected:?} payload, got: {other:?}"
        ),
    }
}

/// Assert an error is `MalformedDate` on the given field, carrying the
/// offending raw value.
pub fn assert_malformed_date(err: &Error, field: &str, value: &str) {
    match err {
        Error::MalformedDate {
            field: actual_field,
            value: actual_value,
            ..
        } if *actual_field == field && actual_value == value => {}
        other => panic!(
            "expected MalformedDate on {field:?} with value {value:?}, got: {other:?}"
        ),
    }
}

/// Assert an error is `MissingDate`.
pub fn assert_missing_date(err: &Error) {
    match err {
        Error::MissingDate => {}
        other => panic!("expected MissingDate, got: {other:?}"),
    }
}

/// Assert an error is `MalformedQuantity` carrying the offending value.
pub fn assert_malformed_quantity(err: &Error, value: &str) {
    match err {
        Error::MalformedQuantity { value: actual } if actual == value => {}
        other => panic!(
            "expected MalformedQuantity with value {value:?}, got: {other:?}"
        ),
    }
}

/// Assert an error is `UnexpectedMessageType` carrying the foreign type.
pub fn assert_unexpected_message_type(err: &Error, found: &str) {
    match err {
        Error::UnexpectedMessageType { found: actual } if actual == found => {}
        other => panic!(
            "expected UnexpectedMessageType {found:?}, got: {other:?}"
        ),
    }
}
