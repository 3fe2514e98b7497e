//! Report walking — turns a decoded report envelope into [`OrderRecord`]s.
//!
//! The envelope shape is `{ Header, MessageType, Message: [ { MessageID,
//! Order } ] }`. Only structure is walked here: an absent `Message` block
//! is an empty report, a one-entry `Message` collapsed to a lone map is
//! accepted, and a message without an `Order` key is skipped with a warn.
//! Order numbers are NOT assigned here — that stays with the downstream
//! consumer.

use oar_core::error::value_kind;
use oar_core::{Error, OrderRecord, ReportConfig};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Envelope `MessageType` this walker accepts.
const ORDER_REPORT_MESSAGE_TYPE: &str = "OrderReport";

/// A fully walked report: the typed orders, in document order.
#[derive(Debug, Default)]
pub struct OrderReport {
    orders: Vec<OrderRecord>,
}

impl OrderReport {
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Mutable access, for callers assigning internal order numbers.
    pub fn orders_mut(&mut self) -> &mut [OrderRecord] {
        &mut self.orders
    }

    pub fn into_orders(self) -> Vec<OrderRecord> {
        self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Walk one decoded report document.
///
/// With `config.lenient`, an order that fails to construct is skipped with
/// a warn log and the rest of the report still parses; otherwise the first
/// failure aborts the walk. Envelope-level problems (a non-map document, a
/// foreign `MessageType` when verification is on) always fail.
pub fn parse(doc: Value, config: &ReportConfig) -> Result<OrderReport, Error> {
    let envelope = match doc {
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidInput {
                expected: "report envelope",
                found: value_kind(&other),
            });
        }
    };

    if config.verify_message_type {
        match envelope.get("MessageType").and_then(Value::as_str) {
            Some(ORDER_REPORT_MESSAGE_TYPE) => {}
            Some(other) => {
                return Err(Error::UnexpectedMessageType {
                    found: other.to_owned(),
                });
            }
            None => debug!("report envelope carries no MessageType"),
        }
    }

    let mut orders = Vec::new();
    for (index, message) in messages(&envelope).enumerate() {
        let Some(order) = message.get("Order") else {
            warn!(index, "report message carries no Order, skipping");
            continue;
        };
        match OrderRecord::new(order.clone()) {
            Ok(record) => orders.push(record),
            Err(err) if config.lenient => {
                warn!(index, %err, "skipping unparseable order");
            }
            Err(err) => return Err(err),
        }
    }

    debug!(orders = orders.len(), "walked order report");
    Ok(OrderReport { orders })
}

/// Iterate `Message` entries: sequence form, collapsed lone-map form, or
/// nothing when the block is absent.
fn messages(envelope: &Map<String, Value>) -> Box<dyn Iterator<Item = &Value> + '_> {
    match envelope.get("Message") {
        None => Box::new(std::iter::empty()),
        Some(Value::Array(entries)) => Box::new(entries.iter()),
        Some(lone) => Box::new(std::iter::once(lone)),
    }
}
