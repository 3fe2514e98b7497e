//! Line items — one product/quantity/price entry within an order.
//!
//! Unlike the order record, line items are fully materialized at
//! construction: the raw item map is small, and validating quantity and
//! price amounts up front means `items()` surfaces malformed entries the
//! first time they are touched rather than on some later field read.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{value_kind, Error};

/// One priced component of a line item: `Principal`, `Shipping`, `Tax`, …
///
/// Amounts are decimals, never floats — they are money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceComponent {
    pub kind: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

/// One line item from an order's `Item` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemRecord {
    pub amazon_order_item_code: Option<String>,
    pub sku: Option<String>,
    pub title: Option<String>,
    /// Units ordered. `None` when the report omits the field; a present
    /// value that is not a non-negative integer fails construction.
    pub quantity: Option<u32>,
    /// `ItemPrice.Component` entries in document order; empty when the
    /// report carries no price block.
    pub price_components: Vec<PriceComponent>,
}

impl LineItemRecord {
    /// Build from a raw item map.
    pub fn from_raw(raw: &Value) -> Result<Self, Error> {
        let Value::Object(map) = raw else {
            return Err(Error::InvalidInput {
                expected: "line item",
                found: value_kind(raw),
            });
        };
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);

        let quantity = match map.get("Quantity") {
            None => None,
            Some(value) => Some(parse_quantity(value)?),
        };

        let price_components = match map.get("ItemPrice").and_then(|price| price.get("Component")) {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(PriceComponent::from_raw)
                .collect::<Result<_, _>>()?,
            // Collapsed lone-map form, same as `Item` itself.
            Some(lone) => vec![PriceComponent::from_raw(lone)?],
        };

        Ok(Self {
            amazon_order_item_code: text("AmazonOrderItemCode"),
            sku: text("SKU"),
            title: text("Title"),
            quantity,
            price_components,
        })
    }

    /// First price component whose `Type` matches `kind`.
    pub fn component(&self, kind: &str) -> Option<&PriceComponent> {
        self.price_components
            .iter()
            .find(|component| component.kind.as_deref() == Some(kind))
    }

    /// The `Principal` component — the product price itself.
    pub fn principal(&self) -> Option<&PriceComponent> {
        self.component("Principal")
    }
}

impl PriceComponent {
    fn from_raw(raw: &Value) -> Result<Self, Error> {
        let Value::Object(map) = raw else {
            return Err(Error::InvalidInput {
                expected: "price component",
                found: value_kind(raw),
            });
        };
        let amount = match map.get("Amount") {
            None => None,
            Some(value) => Some(parse_amount("Amount", value)?),
        };
        Ok(Self {
            kind: map.get("Type").and_then(Value::as_str).map(str::to_owned),
            amount,
            currency: map.get("Currency").and_then(Value::as_str).map(str::to_owned),
        })
    }
}

fn parse_quantity(value: &Value) -> Result<u32, Error> {
    let parsed = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::MalformedQuantity {
        value: value.to_string(),
    })
}

fn parse_amount(field: &'static str, value: &Value) -> Result<Decimal, Error> {
    let text = match value {
        Value::String(text) => text.trim().to_owned(),
        // A bare JSON number round-trips exactly through its literal text.
        Value::Number(number) => number.to_string(),
        other => {
            return Err(Error::InvalidInput {
                expected: "price amount",
                found: value_kind(other),
            });
        }
    };
    text.parse::<Decimal>().map_err(|source| Error::MalformedAmount {
        field,
        value: text,
        source,
    })
}
