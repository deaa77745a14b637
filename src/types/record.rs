//! Input record types for the retail reconciler
//!
//! This module defines the five flat-file sources, their layout (file name,
//! separator, header, arity), and the typed records each line decodes into.

use serde::Deserialize;

/// Customer identifier (e.g. `c01`)
pub type CustomerId = String;

/// Store identifier (e.g. `s00`)
pub type StoreId = String;

/// Product identifier (e.g. `p00`)
pub type ProductId = String;

/// Stock, purchase and sale counts
///
/// Signed because inventory files may carry any integer; sales never drive a
/// stock counter below zero.
pub type Quantity = i64;

/// The flat-file sources read by one run, in import order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFile {
    Customers,
    Stores,
    Products,
    Inventory,
    Transactions,
}

impl SourceFile {
    /// File name inside the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            SourceFile::Customers => "customers.txt",
            SourceFile::Stores => "stores.txt",
            SourceFile::Products => "products.txt",
            SourceFile::Inventory => "inventory.txt",
            SourceFile::Transactions => "transactions.txt",
        }
    }

    /// Field separator byte
    pub fn separator(self) -> u8 {
        match self {
            SourceFile::Customers => b',',
            SourceFile::Stores => b'*',
            SourceFile::Products | SourceFile::Inventory | SourceFile::Transactions => b'|',
        }
    }

    /// Whether the first line is a header to discard
    pub fn has_header(self) -> bool {
        matches!(
            self,
            SourceFile::Stores | SourceFile::Inventory | SourceFile::Transactions
        )
    }

    /// Number of fields every line must carry
    pub fn arity(self) -> usize {
        match self {
            SourceFile::Customers | SourceFile::Stores => 2,
            SourceFile::Products | SourceFile::Inventory => 3,
            SourceFile::Transactions => 4,
        }
    }
}

/// `customers.txt`: id, name
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
}

/// `stores.txt`: id, name
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreRecord {
    pub id: StoreId,
    pub name: String,
}

/// `products.txt`: product id, store id, product name
///
/// The product name is carried for completeness; nothing downstream reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    pub product: ProductId,
    pub store: StoreId,
    pub name: String,
}

/// `inventory.txt`: store id, quantity, product id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryRecord {
    pub store: StoreId,
    pub quantity: Quantity,
    pub product: ProductId,
}

/// `transactions.txt`: customer id, requested quantity, product id, store id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    pub customer: CustomerId,
    pub quantity: Quantity,
    pub product: ProductId,
    pub store: StoreId,
}
