//! Store entity: stock levels and sales history

use super::error::LedgerError;
use super::record::{CustomerId, ProductId, Quantity, StoreId};
use std::collections::BTreeMap;

/// A store, its current stock and who bought what from it
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    /// Unique store id
    pub id: StoreId,

    /// Display name used in reports
    pub name: String,

    /// Current stock per product
    ///
    /// Seeded by the catalog loader; only sales decrease it.
    pub stock: BTreeMap<ProductId, Quantity>,

    /// Cumulative quantity sold, by product then by customer
    pub sales: BTreeMap<ProductId, BTreeMap<CustomerId, Quantity>>,
}

impl Store {
    /// Create a store with no stock and no sales
    pub fn new(id: impl Into<StoreId>, name: impl Into<String>) -> Self {
        Store {
            id: id.into(),
            name: name.into(),
            stock: BTreeMap::new(),
            sales: BTreeMap::new(),
        }
    }

    /// Units of a product currently in stock (zero if never listed)
    pub fn stock_of(&self, product: &str) -> Quantity {
        self.stock.get(product).copied().unwrap_or(0)
    }

    /// Register a product with zero stock unless it is already listed
    pub fn list_product(&mut self, product: &str) {
        self.stock.entry(product.to_string()).or_insert(0);
    }

    /// Add inventory for a product, listing it if needed
    pub fn restock(&mut self, product: &str, quantity: Quantity) -> Result<(), LedgerError> {
        let new_stock = self
            .stock_of(product)
            .checked_add(quantity)
            .ok_or_else(|| LedgerError::quantity_overflow("restock", product))?;
        self.stock.insert(product.to_string(), new_stock);

        Ok(())
    }

    /// Sell units of a product to a customer
    ///
    /// Refuses to sell more than is in stock, so a sale can never push a
    /// counter below zero. A zero-unit sale only materialises the stock entry.
    pub fn sell(
        &mut self,
        product: &str,
        customer: &str,
        quantity: Quantity,
    ) -> Result<(), LedgerError> {
        let in_stock = self.stock_of(product);
        if quantity < 0 || quantity > in_stock {
            return Err(LedgerError::insufficient_stock(
                &self.id, product, in_stock, quantity,
            ));
        }

        self.stock.insert(product.to_string(), in_stock - quantity);
        if quantity == 0 {
            return Ok(());
        }

        let buyers = self.sales.entry(product.to_string()).or_default();
        let sold = buyers.get(customer).copied().unwrap_or(0);
        let new_sold = sold
            .checked_add(quantity)
            .ok_or_else(|| LedgerError::quantity_overflow("sale", product))?;
        buyers.insert(customer.to_string(), new_sold);

        Ok(())
    }

    /// Total units of a product sold across all customers
    pub fn sold_total(&self, product: &str) -> Quantity {
        self.sales
            .get(product)
            .map(|buyers| buyers.values().sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_product_sets_zero_once() {
        let mut store = Store::new("s00", "Maha's Movies");
        store.list_product("p00");
        assert_eq!(store.stock.get("p00"), Some(&0));

        store.restock("p00", 91).unwrap();
        store.list_product("p00");
        assert_eq!(store.stock_of("p00"), 91);
    }

    #[test]
    fn test_restock_accumulates() {
        let mut store = Store::new("s02", "Dariel's Donuts");
        store.restock("p05", 70).unwrap();
        store.restock("p05", 2).unwrap();
        assert_eq!(store.stock_of("p05"), 72);
    }

    #[test]
    fn test_restock_overflow_leaves_stock() {
        let mut store = Store::new("s00", "Maha's Movies");
        store.restock("p00", Quantity::MAX).unwrap();
        let result = store.restock("p00", 1);
        assert!(matches!(result, Err(LedgerError::QuantityOverflow { .. })));
        assert_eq!(store.stock_of("p00"), Quantity::MAX);
    }

    #[test]
    fn test_sell_updates_stock_and_sales() {
        let mut store = Store::new("s00", "Maha's Movies");
        store.restock("p00", 91).unwrap();

        store.sell("p00", "c01", 4).unwrap();
        store.sell("p00", "c02", 3).unwrap();
        store.sell("p00", "c01", 1).unwrap();

        assert_eq!(store.stock_of("p00"), 83);
        assert_eq!(store.sales["p00"]["c01"], 5);
        assert_eq!(store.sales["p00"]["c02"], 3);
        assert_eq!(store.sold_total("p00"), 8);
    }

    #[test]
    fn test_sell_more_than_stock_is_rejected() {
        let mut store = Store::new("s01", "Ben's Books");
        store.restock("p03", 1).unwrap();

        let result = store.sell("p03", "c01", 2);
        assert_eq!(
            result,
            Err(LedgerError::insufficient_stock("s01", "p03", 1, 2))
        );
        assert_eq!(store.stock_of("p03"), 1);
        assert!(store.sales.is_empty());
    }

    #[test]
    fn test_zero_sale_of_unlisted_product_only_lists_it() {
        let mut store = Store::new("s01", "Ben's Books");
        store.sell("p99", "c01", 0).unwrap();

        assert_eq!(store.stock.get("p99"), Some(&0));
        assert!(store.sales.is_empty());
        assert_eq!(store.sold_total("p99"), 0);
    }
}
