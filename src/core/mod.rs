//! Core business logic module
//!
//! This module contains the reconciliation components:
//! - `registry` - Customer and store storage, id resolution
//! - `catalog` - Product listing and inventory loading
//! - `engine` - Stock-constrained transaction processing

pub mod catalog;
pub mod engine;
pub mod registry;

pub use catalog::CatalogLoader;
pub use engine::{Fulfillment, ReconciliationEngine};
pub use registry::{DuplicatePolicy, Registry};
