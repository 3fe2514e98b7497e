//! The order record — one decoded order entry, typed.
//!
//! [`OrderRecord`] wraps the raw order map read-only and exposes the
//! normalized accessors downstream sync code consumes. Scalar accessors
//! read the raw map directly on every call; addresses and line items are
//! built on first access and cached for the record's lifetime.
//!
//! Every accessor is independently usable: a malformed date does not stop
//! the caller from reading the email or the line items.

use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::address::AddressRecord;
use crate::error::{value_kind, Error};
use crate::item::LineItemRecord;

/// Raw fields that may carry the order date, in priority order.
///
/// `OrderPostedDate` marks payment processing completion and wins over the
/// placement-time `OrderDate` when both are present. The precedence is
/// stated by the source API docs but has not been independently re-verified;
/// see DESIGN.md before changing it.
const DATE_FIELDS: [&str; 2] = ["OrderPostedDate", "OrderDate"];

/// One order from a decoded order report.
///
/// Holds the raw order structure immutably. The only mutable state is the
/// internally assigned `order_number`, which callers set after construction
/// and which is never derived from the raw payload.
#[derive(Debug)]
pub struct OrderRecord {
    raw: Map<String, Value>,
    order_number: Option<String>,
    shipping: OnceLock<Option<AddressRecord>>,
    billing: OnceLock<Option<AddressRecord>>,
    items: OnceLock<Vec<LineItemRecord>>,
}

impl OrderRecord {
    /// Wrap one raw order structure.
    ///
    /// The value must be a map; nothing deeper is validated here — every
    /// accessor tolerates missing keys on its own.
    pub fn new(raw: Value) -> Result<Self, Error> {
        let raw = match raw {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidInput {
                    expected: "order",
                    found: value_kind(&other),
                });
            }
        };
        Ok(Self {
            raw,
            order_number: None,
            shipping: OnceLock::new(),
            billing: OnceLock::new(),
            items: OnceLock::new(),
        })
    }

    /// The internally assigned order number, if one has been set.
    ///
    /// Distinct from [`amazon_order_number`](Self::amazon_order_number):
    /// this is our own identifier, assigned by the caller, unset by default.
    pub fn order_number(&self) -> Option<&str> {
        self.order_number.as_deref()
    }

    /// Assign the internal order number.
    pub fn set_order_number(&mut self, number: impl Into<String>) {
        self.order_number = Some(number.into());
    }

    /// The marketplace's own order id (`AmazonOrderID`), verbatim.
    pub fn amazon_order_number(&self) -> Option<&str> {
        self.raw.get("AmazonOrderID").and_then(Value::as_str)
    }

    /// The buyer email from `BillingData.BuyerEmailAddress`.
    ///
    /// Key presence, not truthiness: an explicitly empty email comes back
    /// as `Some("")`, while a missing `BillingData` block or a missing key
    /// yields `None`.
    pub fn email(&self) -> Option<&str> {
        self.raw
            .get("BillingData")?
            .get("BuyerEmailAddress")?
            .as_str()
    }

    /// The order date, preferring `OrderPostedDate` over `OrderDate`.
    ///
    /// The first of the two fields that is present and non-empty is parsed
    /// as ISO-8601. A malformed value in the chosen field is an error — no
    /// fallback to the other field, no substitute default. If neither field
    /// carries a value, [`Error::MissingDate`] is returned and the rest of
    /// the record stays usable.
    pub fn order_date(&self) -> Result<DateTime<FixedOffset>, Error> {
        for field in DATE_FIELDS {
            match self.raw.get(field) {
                Some(Value::String(value)) if !value.is_empty() => {
                    return DateTime::parse_from_rfc3339(value).map_err(|source| {
                        Error::MalformedDate {
                            field,
                            value: value.clone(),
                            source,
                        }
                    });
                }
                _ => {}
            }
        }
        Err(Error::MissingDate)
    }

    /// The shipping address, from `FulfillmentData.Address`.
    ///
    /// Built on first access and cached; repeated calls return the same
    /// instance. A missing `FulfillmentData` block or a missing `Address`
    /// sub-map is `Ok(None)`, never an error. Any address present here is
    /// treated as the shipping address regardless of fulfillment channel —
    /// a known limitation of the report format, preserved deliberately.
    pub fn shipping_address(&self) -> Result<Option<&AddressRecord>, Error> {
        Self::address_slot(&self.shipping, &self.raw, "FulfillmentData")
    }

    /// The billing address, from `BillingData.Address`. Same semantics as
    /// [`shipping_address`](Self::shipping_address).
    pub fn billing_address(&self) -> Result<Option<&AddressRecord>, Error> {
        Self::address_slot(&self.billing, &self.raw, "BillingData")
    }

    /// The line items, from `Item`, in document order.
    ///
    /// Built on first access and cached. An absent `Item` key yields an
    /// empty iteration. A construction failure inside
    /// [`LineItemRecord::from_raw`] propagates unchanged and leaves the
    /// slot unpopulated, so a later call retries.
    pub fn items(&self) -> Result<std::slice::Iter<'_, LineItemRecord>, Error> {
        if let Some(cached) = self.items.get() {
            return Ok(cached.iter());
        }
        let built = match self.raw.get("Item") {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(LineItemRecord::from_raw)
                .collect::<Result<_, _>>()?,
            // Generic decoders collapse a one-entry sequence into the entry.
            Some(lone) => vec![LineItemRecord::from_raw(lone)?],
        };
        Ok(self.items.get_or_init(|| built).iter())
    }

    /// Shared check-then-populate for the two address slots.
    ///
    /// `OnceLock` is the atomic check-and-set that keeps the compute-once
    /// guarantee under concurrent first access; on a race, exactly one
    /// built value is stored and every caller sees that one.
    fn address_slot<'a>(
        slot: &'a OnceLock<Option<AddressRecord>>,
        raw: &Map<String, Value>,
        root: &str,
    ) -> Result<Option<&'a AddressRecord>, Error> {
        if let Some(cached) = slot.get() {
            return Ok(cached.as_ref());
        }
        let built = match raw.get(root).and_then(|data| data.get("Address")) {
            Some(address) => Some(AddressRecord::from_raw(address)?),
            None => None,
        };
        Ok(slot.get_or_init(|| built).as_ref())
    }
}
