//! Reconciliation engine
//!
//! This module provides the ReconciliationEngine that applies purchase
//! transactions against store stock and customer ledgers.
//!
//! The engine enforces the business rules:
//! - Transactions are applied strictly in the order they are given
//! - A customer never receives more than the store holds at that moment
//! - Shortfalls are truncated, never backordered or rejected
//! - Unknown customer or store ids abort processing

use crate::core::registry::Registry;
use crate::types::{
    CustomerId, LedgerError, ProductId, Quantity, StoreId, TransactionRecord,
};
use std::fmt;

/// Outcome of one transaction: what was asked for and what was granted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    pub customer: CustomerId,
    pub store: StoreId,
    pub product: ProductId,
    /// Quantity the transaction asked for
    pub requested: Quantity,
    /// Store stock before the sale
    pub in_stock: Quantity,
    /// Quantity actually granted
    pub fulfilled: Quantity,
}

impl fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer {} wants {} of {}. Store {} has {} in stock. Customer will receive {}",
            self.customer, self.requested, self.product, self.store, self.in_stock, self.fulfilled
        )
    }
}

/// Quantity a sale can grant: the request capped by stock, never below zero
pub fn fulfillable(requested: Quantity, in_stock: Quantity) -> Quantity {
    requested.min(in_stock).max(0)
}

/// Transaction reconciliation engine
///
/// Owns the registry for the duration of the transaction pass and hands it
/// back for reporting once every transaction has been applied.
pub struct ReconciliationEngine {
    registry: Registry,
}

impl ReconciliationEngine {
    /// Create an engine over a fully loaded registry
    pub fn new(registry: Registry) -> Self {
        ReconciliationEngine { registry }
    }

    /// Apply a single transaction
    ///
    /// 1. Resolves the customer and the store
    /// 2. Reads current stock for the product (unlisted products count as zero)
    /// 3. Grants `min(requested, stock)`
    /// 4. Moves the granted units from store stock to the store's sales
    ///    history and the customer's ledger
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer or store id is unknown
    /// - The customer's ledger would overflow
    ///
    /// Nothing is mutated when an error is returned.
    pub fn process(&mut self, record: TransactionRecord) -> Result<Fulfillment, LedgerError> {
        let (customer, store) = self
            .registry
            .customer_and_store_mut(&record.customer, &record.store)?;

        let in_stock = store.stock_of(&record.product);
        let fulfilled = fulfillable(record.quantity, in_stock);

        // Check the ledger before touching stock so a failure leaves both untouched
        customer
            .purchased(&record.product)
            .checked_add(fulfilled)
            .ok_or_else(|| LedgerError::quantity_overflow("purchase", &record.product))?;

        store.sell(&record.product, &record.customer, fulfilled)?;
        customer.record_purchase(&record.product, fulfilled)?;

        let fulfillment = Fulfillment {
            customer: record.customer,
            store: record.store,
            product: record.product,
            requested: record.quantity,
            in_stock,
            fulfilled,
        };
        log::info!("{}", fulfillment);

        Ok(fulfillment)
    }

    /// Read access to the current state
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Finish processing and hand back the reconciled state
    pub fn into_registry(self) -> Registry {
        self.registry
    }
}
