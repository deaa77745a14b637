//! Customer entity and purchase ledger

use super::error::LedgerError;
use super::record::{CustomerId, ProductId, Quantity};
use std::collections::BTreeMap;

/// A customer and everything they have received so far
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Unique customer id
    pub id: CustomerId,

    /// Display name used in reports
    pub name: String,

    /// Cumulative fulfilled quantity per product
    ///
    /// Only products the customer actually received appear here.
    pub products: BTreeMap<ProductId, Quantity>,
}

impl Customer {
    /// Create a customer with an empty purchase ledger
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Self {
        Customer {
            id: id.into(),
            name: name.into(),
            products: BTreeMap::new(),
        }
    }

    /// Quantity of a product received so far (zero if never received)
    pub fn purchased(&self, product: &str) -> Quantity {
        self.products.get(product).copied().unwrap_or(0)
    }

    /// Add a fulfilled purchase to the ledger
    ///
    /// Zero-quantity purchases leave the ledger untouched.
    pub fn record_purchase(&mut self, product: &str, quantity: Quantity) -> Result<(), LedgerError> {
        if quantity == 0 {
            return Ok(());
        }

        let new_total = self
            .purchased(product)
            .checked_add(quantity)
            .ok_or_else(|| LedgerError::quantity_overflow("purchase", product))?;
        self.products.insert(product.to_string(), new_total);

        Ok(())
    }
}
