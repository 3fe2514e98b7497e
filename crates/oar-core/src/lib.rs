//! oar-core — Orders from Amazon Reports, core record types.
//!
//! This crate holds the typed records an order report decodes into, plus
//! the shared error type and pipeline configuration. The report-walking
//! layer lives in the `oar` crate on top.
//!
//! # Architecture
//!
//! ```text
//! decoded report value ──► report walker ──► OrderRecord
//!                                              ├── AddressRecord  (lazy)
//!                                              └── LineItemRecord (lazy)
//! ```
//!
//! Everything here is synchronous and in-memory: the upstream decoder has
//! already materialized the report as a generic `serde_json::Value`, and
//! laziness means deferred cached computation on first access, nothing
//! asynchronous.

pub mod address;
pub mod config;
pub mod error;
pub mod item;
pub mod order;

pub use address::AddressRecord;
pub use config::{Config, ReportConfig};
pub use error::Error;
pub use item::{LineItemRecord, PriceComponent};
pub use order::OrderRecord;
