//! Catalog loading
//!
//! Associates products with the stores that carry them and loads each
//! store's starting inventory. Both steps run before any transaction.

use crate::core::registry::Registry;
use crate::types::{InventoryRecord, LedgerError, ProductRecord};

/// Applies product and inventory records to the stores of a registry
pub struct CatalogLoader<'a> {
    registry: &'a mut Registry,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        CatalogLoader { registry }
    }

    /// List a product under its store with zero stock if not already listed
    ///
    /// Re-applying the same record is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStore` if the record names a store that was never loaded.
    pub fn add_product(&mut self, record: &ProductRecord) -> Result<(), LedgerError> {
        let store = self.registry.store_mut(&record.store)?;
        store.list_product(&record.product);
        log::debug!(
            "store {} lists {} ({})",
            record.store,
            record.product,
            record.name
        );
        Ok(())
    }

    /// Add an inventory quantity to a store's stock for a product
    ///
    /// Quantities for the same (store, product) pair accumulate.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStore` for an unknown store and `QuantityOverflow` if
    /// the stock counter would overflow.
    pub fn add_inventory(&mut self, record: &InventoryRecord) -> Result<(), LedgerError> {
        let store = self.registry.store_mut(&record.store)?;
        store.restock(&record.product, record.quantity)?;
        log::debug!(
            "store {} stocks {} of {} (now {})",
            record.store,
            record.quantity,
            record.product,
            store.stock_of(&record.product)
        );
        Ok(())
    }
}
