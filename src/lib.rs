//! Retail Reconciler Library
//! # Overview
//!
//! This library reconciles flat-file customer, store, catalog, inventory and
//! purchase records into per-customer and per-store ledgers, then renders
//! them as two summary reports.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Customer, Store, input records, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Fixed-arity record reading and report rendering
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - Customer and store storage
//!   - [`core::catalog`] - Product listing and inventory loading
//!   - [`core::engine`] - Stock-constrained transaction processing
//! - [`pipeline`] - Ordered import of a data directory and failure policy
//! - [`report`] - Read-only customer and store views
//!
//! # Input Files
//!
//! | File | Separator | Header | Fields |
//! |---|---|---|---|
//! | `customers.txt` | `,` | no | customer id, name |
//! | `stores.txt` | `*` | yes | store id, name |
//! | `products.txt` | `\|` | no | product id, store id, product name |
//! | `inventory.txt` | `\|` | yes | store id, quantity, product id |
//! | `transactions.txt` | `\|` | yes | customer id, quantity, product id, store id |
//!
//! # Fulfillment Rule
//!
//! Transactions are applied in file order. Each one grants
//! `min(requested, stock)`; shortfalls are truncated, never backordered, so a
//! store's stock is never driven below zero.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod types;

pub use core::{CatalogLoader, DuplicatePolicy, Fulfillment, ReconciliationEngine, Registry};
pub use io::{write_report, RecordReader};
pub use pipeline::{ImportConfig, ImportSummary, Importer, Ledger, StepOutcome};
pub use report::{Cell, CustomerView, ReportView, StoreView};
pub use types::{Customer, LedgerError, Quantity, SourceFile, Store};
