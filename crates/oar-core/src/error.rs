//! Crate-wide error type.
//!
//! One enum covers every construction and accessor failure, so an error
//! raised while building a nested record passes through `items()` or the
//! address accessors unchanged instead of being re-wrapped.
//!
//! Absence is never an error here. A missing `FulfillmentData` block, a
//! missing `Item` sequence, or a missing address field all yield `None` /
//! empty results; only *present but malformed* data produces an [`Error`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A record constructor was handed something other than a map.
    #[error("{expected} payload must be an object, got {found}")]
    InvalidInput {
        expected: &'static str,
        found: &'static str,
    },

    /// A date field was present but did not parse as ISO-8601.
    #[error("unparseable {field} {value:?}")]
    MalformedDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Neither `OrderPostedDate` nor `OrderDate` carried a usable value.
    #[error("order carries no usable date field")]
    MissingDate,

    /// A line item `Quantity` was present but not a non-negative integer.
    #[error("unparseable line item quantity {value}")]
    MalformedQuantity { value: String },

    /// A price component `Amount` was present but not a decimal.
    #[error("unparseable {field} amount {value:?}")]
    MalformedAmount {
        field: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// The report envelope declared itself as something other than an
    /// order report.
    #[error("expected an OrderReport envelope, got {found:?}")]
    UnexpectedMessageType { found: String },
}

/// Human-readable shape of a JSON value, for `InvalidInput` messages.
pub fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
