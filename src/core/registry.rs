//! Entity registry module
//!
//! This module provides the `Registry` struct which owns every customer and
//! store loaded during a run.
//!
//! The Registry is responsible for:
//! - Creating entities from customer and store records
//! - Applying the duplicate-id policy
//! - Resolving ids to entities, failing on unknown ids
//! - Providing id-sorted listings for report generation

use crate::types::{Customer, CustomerRecord, LedgerError, Store, StoreRecord};
use std::collections::HashMap;

/// What to do when a customer or store id appears a second time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier entity
    #[default]
    LastWriteWins,
    /// A repeated id is a fatal error
    Reject,
}

/// Keyed storage for customers and stores
///
/// Entities are never created implicitly: lookups of unknown ids fail with
/// `UnknownCustomer` / `UnknownStore`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    customers: HashMap<String, Customer>,
    stores: HashMap<String, Store>,
    duplicates: DuplicatePolicy,
}

impl Registry {
    /// Create an empty registry with last-write-wins duplicates
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with an explicit duplicate policy
    pub fn with_policy(duplicates: DuplicatePolicy) -> Self {
        Registry {
            duplicates,
            ..Self::default()
        }
    }

    /// Register a customer from its record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCustomer` if the id is already known and the policy
    /// is `Reject`.
    pub fn add_customer(&mut self, record: CustomerRecord) -> Result<(), LedgerError> {
        if self.duplicates == DuplicatePolicy::Reject && self.customers.contains_key(&record.id) {
            return Err(LedgerError::DuplicateCustomer { id: record.id });
        }

        let customer = Customer::new(record.id, record.name);
        self.customers.insert(customer.id.clone(), customer);
        Ok(())
    }

    /// Register a store from its record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateStore` if the id is already known and the policy is
    /// `Reject`.
    pub fn add_store(&mut self, record: StoreRecord) -> Result<(), LedgerError> {
        if self.duplicates == DuplicatePolicy::Reject && self.stores.contains_key(&record.id) {
            return Err(LedgerError::DuplicateStore { id: record.id });
        }

        let store = Store::new(record.id, record.name);
        self.stores.insert(store.id.clone(), store);
        Ok(())
    }

    /// Look up a customer by id
    pub fn customer(&self, id: &str) -> Result<&Customer, LedgerError> {
        self.customers
            .get(id)
            .ok_or_else(|| LedgerError::unknown_customer(id))
    }

    /// Look up a store by id
    pub fn store(&self, id: &str) -> Result<&Store, LedgerError> {
        self.stores
            .get(id)
            .ok_or_else(|| LedgerError::unknown_store(id))
    }

    /// Look up a store by id for mutation
    pub fn store_mut(&mut self, id: &str) -> Result<&mut Store, LedgerError> {
        self.stores
            .get_mut(id)
            .ok_or_else(|| LedgerError::unknown_store(id))
    }

    /// Resolve both sides of a sale for mutation
    ///
    /// The customer is resolved first, so a transaction naming two unknown
    /// ids reports the customer.
    pub fn customer_and_store_mut(
        &mut self,
        customer: &str,
        store: &str,
    ) -> Result<(&mut Customer, &mut Store), LedgerError> {
        let customer = self
            .customers
            .get_mut(customer)
            .ok_or_else(|| LedgerError::unknown_customer(customer))?;
        let store = self
            .stores
            .get_mut(store)
            .ok_or_else(|| LedgerError::unknown_store(store))?;
        Ok((customer, store))
    }

    /// All customers sorted by id
    pub fn get_all_customers(&self) -> Vec<&Customer> {
        let mut customers: Vec<&Customer> = self.customers.values().collect();
        customers.sort_by(|a, b| a.id.cmp(&b.id));
        customers
    }

    /// All stores sorted by id
    pub fn get_all_stores(&self) -> Vec<&Store> {
        let mut stores: Vec<&Store> = self.stores.values().collect();
        stores.sort_by(|a, b| a.id.cmp(&b.id));
        stores
    }

    /// Number of registered customers
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Number of registered stores
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }
}
