//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `customer`: Customer entity and purchase ledger
//! - `store`: Store entity, stock levels and sales history
//! - `record`: Source file layouts and typed input records
//! - `error`: Error types for the reconciler

pub mod customer;
pub mod error;
pub mod record;
pub mod store;

pub use customer::Customer;
pub use error::LedgerError;
pub use record::{
    CustomerId, CustomerRecord, InventoryRecord, ProductId, ProductRecord, Quantity, SourceFile,
    StoreId, StoreRecord, TransactionRecord,
};
pub use store::Store;
