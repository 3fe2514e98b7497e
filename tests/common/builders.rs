//! Test builders — ergonomic constructors for raw order structures.
//!
//! These builders produce the generic decoded-report shape the crate
//! consumes. They are designed for readability in test assertions, not for
//! production use; they panic on invalid input rather than returning
//! `Result`.

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// RawOrderBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one raw order map.
///
/// # Example
///
/// ```rust
/// let raw = RawOrderBuilder::new()
///     .amazon_order_id("058-1233752-8214740")
///     .order_posted_date("2020-01-05T00:00:00Z")
///     .email("buyer@example.com")
///     .shipping_address(sample_address("Ana Santos"))
///     .item(sample_item("SKU-1", 2))
///     .build();
/// ```
pub struct RawOrderBuilder {
    order: Map<String, Value>,
    billing: Map<String, Value>,
    fulfillment: Map<String, Value>,
    items: Vec<Value>,
}

impl RawOrderBuilder {
    pub fn new() -> Self {
        Self {
            order: Map::new(),
            billing: Map::new(),
            fulfillment: Map::new(),
            items: Vec::new(),
        }
    }

    pub fn amazon_order_id(mut self, id: &str) -> Self {
        self.order.insert("AmazonOrderID".to_string(), id.into());
        self
    }

    pub fn order_date(mut self, date: &str) -> Self {
        self.order.insert("OrderDate".to_string(), date.into());
        self
    }

    pub fn order_posted_date(mut self, date: &str) -> Self {
        self.order.insert("OrderPostedDate".to_string(), date.into());
        self
    }

    /// Put `BuyerEmailAddress` into the `BillingData` block.
    pub fn email(mut self, email: &str) -> Self {
        self.billing
            .insert("BuyerEmailAddress".to_string(), email.into());
        self
    }

    /// Put an `Address` sub-map into the `BillingData` block.
    pub fn billing_address(mut self, address: Value) -> Self {
        self.billing.insert("Address".to_string(), address);
        self
    }

    /// Put an `Address` sub-map into the `FulfillmentData` block.
    pub fn shipping_address(mut self, address: Value) -> Self {
        self.fulfillment.insert("Address".to_string(), address);
        self
    }

    /// Put an arbitrary key into the `FulfillmentData` block (e.g. a
    /// fulfillment-method indicator).
    pub fn fulfillment_field(mut self, key: &str, value: Value) -> Self {
        self.fulfillment.insert(key.to_string(), value);
        self
    }

    /// Append one entry to the `Item` sequence.
    pub fn item(mut self, item: Value) -> Self {
        self.items.push(item);
        self
    }

    /// Insert an arbitrary top-level field verbatim. Useful for malformed
    /// shapes the other methods refuse to produce.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.order.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        let mut order = self.order;
        if !self.billing.is_empty() {
            order.insert("BillingData".to_string(), Value::Object(self.billing));
        }
        if !self.fulfillment.is_empty() {
            order.insert("FulfillmentData".to_string(), Value::Object(self.fulfillment));
        }
        if !self.items.is_empty() {
            order.insert("Item".to_string(), Value::Array(self.items));
        }
        Value::Object(order)
    }
}

impl Default for RawOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A minimal raw order: marketplace id only.
pub fn minimal_order(id: &str) -> Value {
    json!({ "AmazonOrderID": id })
}

/// An address map with the full field set.
pub fn sample_address(name: &str) -> Value {
    json!({
        "Name": name,
        "AddressFieldOne": "Rua das Flores 12",
        "AddressFieldTwo": "Apt 3",
        "City": "Porto",
        "StateOrRegion": "Porto District",
        "PostalCode": "4000-123",
        "CountryCode": "PT",
        "PhoneNumber": "+351 912 345 678"
    })
}

/// A line item with a principal and shipping price, quantity in the string
/// form the report decoder emits.
pub fn sample_item(sku: &str, quantity: u32) -> Value {
    json!({
        "AmazonOrderItemCode": format!("code-{sku}"),
        "SKU": sku,
        "Title": format!("Item {sku}"),
        "Quantity": quantity.to_string(),
        "ItemPrice": {
            "Component": [
                { "Type": "Principal", "Amount": "21.99", "Currency": "EUR" },
                { "Type": "Shipping",  "Amount": "3.50",  "Currency": "EUR" }
            ]
        }
    })
}

/// Wrap raw orders into a report envelope, one `Message` entry per order.
pub fn report_doc(orders: Vec<Value>) -> Value {
    let messages: Vec<Value> = orders
        .into_iter()
        .enumerate()
        .map(|(i, order)| json!({ "MessageID": (i + 1).to_string(), "Order": order }))
        .collect();
    json!({
        "Header": {
            "DocumentVersion": "1.01",
            "MerchantIdentifier": "M_EXAMPLE_1234"
        },
        "MessageType": "OrderReport",
        "Message": messages
    })
}
