//! Error types for the retail reconciler
//!
//! This module defines all error types that can occur while importing and
//! reconciling the flat-file inputs.
//!
//! # Error Categories
//!
//! - **Missing input**: a source file could not be opened
//! - **Malformed input**: wrong field count on a line, unparsable field
//! - **Unresolved references**: a record names an unknown customer or store
//! - **Invariant breaches**: overselling stock, quantity overflow, rejected duplicates

use crate::types::record::Quantity;
use thiserror::Error;

/// Main error type for the reconciler
///
/// Each variant carries enough context to locate the offending file and line
/// (for input errors) or the offending entity (for reference errors).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A source file could not be opened
    ///
    /// Lenient runs treat the dependent record stream as empty.
    #[error("Can't open {path}")]
    FileNotFound {
        /// The path that could not be opened
        path: String,
    },

    /// I/O error occurred while reading a source or writing a report
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A line did not split into the expected number of fields
    ///
    /// The import step reading this file is abandoned.
    #[error("{file} has {actual} fields on line {line} but expected {expected}")]
    MalformedRecord {
        /// File name of the source
        file: String,
        /// 1-based physical line number
        line: u64,
        /// Number of fields found on the line
        actual: usize,
        /// Number of fields the source declares
        expected: usize,
    },

    /// A field could not be decoded into its typed value (e.g. a quantity)
    #[error("{file} line {line}: {message}")]
    InvalidField {
        /// File name of the source
        file: String,
        /// 1-based physical line number
        line: u64,
        /// Decoder message
        message: String,
    },

    /// A record referenced a customer id that was never loaded
    #[error("Unknown customer '{id}'")]
    UnknownCustomer {
        /// The unresolved customer id
        id: String,
    },

    /// A record referenced a store id that was never loaded
    #[error("Unknown store '{id}'")]
    UnknownStore {
        /// The unresolved store id
        id: String,
    },

    /// A customer id appeared twice while duplicates are rejected
    #[error("Duplicate customer id '{id}'")]
    DuplicateCustomer {
        /// The repeated customer id
        id: String,
    },

    /// A store id appeared twice while duplicates are rejected
    #[error("Duplicate store id '{id}'")]
    DuplicateStore {
        /// The repeated store id
        id: String,
    },

    /// A sale asked for more units than the store holds
    #[error("Store '{store}' cannot sell {requested} of '{product}': only {in_stock} in stock")]
    InsufficientStock {
        /// Store id
        store: String,
        /// Product id
        product: String,
        /// Units currently in stock
        in_stock: Quantity,
        /// Units the sale asked for
        requested: Quantity,
    },

    /// Adding to a stock or ledger counter would overflow
    #[error("Quantity overflow in {operation} for '{product}'")]
    QuantityOverflow {
        /// Operation that would overflow
        operation: String,
        /// Product id
        product: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Whether this error must stop the whole run
    ///
    /// Malformed input and missing files only abandon the affected import
    /// step; everything else would leave downstream totals silently wrong.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            LedgerError::FileNotFound { .. }
                | LedgerError::MalformedRecord { .. }
                | LedgerError::InvalidField { .. }
        )
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(file: &str, line: u64, actual: usize, expected: usize) -> Self {
        LedgerError::MalformedRecord {
            file: file.to_string(),
            line,
            actual,
            expected,
        }
    }

    /// Create an UnknownCustomer error
    pub fn unknown_customer(id: &str) -> Self {
        LedgerError::UnknownCustomer { id: id.to_string() }
    }

    /// Create an UnknownStore error
    pub fn unknown_store(id: &str) -> Self {
        LedgerError::UnknownStore { id: id.to_string() }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(
        store: &str,
        product: &str,
        in_stock: Quantity,
        requested: Quantity,
    ) -> Self {
        LedgerError::InsufficientStock {
            store: store.to_string(),
            product: product.to_string(),
            in_stock,
            requested,
        }
    }

    /// Create a QuantityOverflow error
    pub fn quantity_overflow(operation: &str, product: &str) -> Self {
        LedgerError::QuantityOverflow {
            operation: operation.to_string(),
            product: product.to_string(),
        }
    }
}
