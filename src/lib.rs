//! oar — Orders from Amazon Reports
//!
//! Adapts decoded order-report documents into stable, typed order records.
//! The upstream fetch/decode pipeline hands this crate a generic
//! `serde_json::Value`; downstream sync code receives [`OrderRecord`]s and
//! never touches the raw structure again.
//!
//! # Architecture
//!
//! ```text
//! decoded report value ──► report::parse ──► OrderReport ──► [OrderRecord]
//!                                                               ├── AddressRecord  (lazy)
//!                                                               └── LineItemRecord (lazy)
//! ```
//!
//! Fetching the report, polling report requests, and tokenizing the XML
//! document into the generic value are all upstream concerns; nothing in
//! this crate performs I/O.

pub mod report;

pub use oar_core::{
    AddressRecord, Config, Error, LineItemRecord, OrderRecord, PriceComponent, ReportConfig,
};
