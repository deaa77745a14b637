//! Reporting views
//!
//! Read-only projections of the reconciled registry into a header plus a
//! lazily produced sequence of rows. Views borrow the registry, so they can be
//! rendered any number of times with identical results.

use crate::core::Registry;
use crate::types::Quantity;
use std::fmt;

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Quantity(Quantity),
    List(Vec<String>),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Quantity(quantity) => write!(f, "{}", quantity),
            Cell::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// A tabular projection: column labels and rows of cells
pub trait ReportView {
    /// Heading printed above the table
    fn title(&self) -> &'static str;

    /// Column labels, in order
    fn header(&self) -> &'static [&'static str];

    /// Rows, produced on demand
    fn rows(&self) -> Box<dyn Iterator<Item = Vec<Cell>> + '_>;
}

/// One row per (customer, product) the customer received
pub struct CustomerView<'a> {
    registry: &'a Registry,
}

impl<'a> CustomerView<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        CustomerView { registry }
    }
}

impl ReportView for CustomerView<'_> {
    fn title(&self) -> &'static str {
        "Customer Summary"
    }

    fn header(&self) -> &'static [&'static str] {
        &["Customer Name", "Product", "Quantity Purchased"]
    }

    fn rows(&self) -> Box<dyn Iterator<Item = Vec<Cell>> + '_> {
        Box::new(
            self.registry
                .get_all_customers()
                .into_iter()
                .flat_map(|customer| {
                    customer.products.iter().map(move |(product, quantity)| {
                        vec![
                            Cell::Text(customer.name.clone()),
                            Cell::Text(product.clone()),
                            Cell::Quantity(*quantity),
                        ]
                    })
                }),
        )
    }
}

/// One row per (store, product) the store sold, with its sorted buyers
pub struct StoreView<'a> {
    registry: &'a Registry,
}

impl<'a> StoreView<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        StoreView { registry }
    }
}

impl ReportView for StoreView<'_> {
    fn title(&self) -> &'static str {
        "Store Summary"
    }

    fn header(&self) -> &'static [&'static str] {
        &["Store", "Products", "Customers", "Quantity Sold"]
    }

    fn rows(&self) -> Box<dyn Iterator<Item = Vec<Cell>> + '_> {
        Box::new(
            self.registry
                .get_all_stores()
                .into_iter()
                .flat_map(|store| {
                    store.sales.iter().map(move |(product, buyers)| {
                        let mut customers: Vec<String> = buyers.keys().cloned().collect();
                        customers.sort();
                        vec![
                            Cell::Text(store.name.clone()),
                            Cell::Text(product.clone()),
                            Cell::List(customers),
                            Cell::Quantity(buyers.values().sum()),
                        ]
                    })
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CatalogLoader, ReconciliationEngine};
    use crate::types::{CustomerRecord, InventoryRecord, StoreRecord, TransactionRecord};

    fn reconciled_registry() -> Registry {
        let mut registry = Registry::new();
        for (id, name) in [("c02", "GitHub Gus"), ("c01", "Debugging Dinesh")] {
            registry
                .add_customer(CustomerRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .unwrap();
        }
        for (id, name) in [("s01", "Ben's Books"), ("s00", "Maha's Movies")] {
            registry
                .add_store(StoreRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .unwrap();
        }
        let mut catalog = CatalogLoader::new(&mut registry);
        for (store, quantity, product) in [("s00", 91, "p00"), ("s00", 27, "p01"), ("s01", 1, "p03")] {
            catalog
                .add_inventory(&InventoryRecord {
                    store: store.to_string(),
                    quantity,
                    product: product.to_string(),
                })
                .unwrap();
        }

        let mut engine = ReconciliationEngine::new(registry);
        for (customer, quantity, product, store) in [
            ("c02", 2, "p00", "s00"),
            ("c01", 4, "p00", "s00"),
            ("c01", 10, "p01", "s00"),
            ("c01", 1, "p03", "s01"),
            ("c02", 1, "p03", "s01"),
        ] {
            engine
                .process(TransactionRecord {
                    customer: customer.to_string(),
                    quantity,
                    product: product.to_string(),
                    store: store.to_string(),
                })
                .unwrap();
        }
        engine.into_registry()
    }

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(text("p00").to_string(), "p00");
        assert_eq!(Cell::Quantity(42).to_string(), "42");
        assert_eq!(
            Cell::List(vec!["c01".to_string(), "c02".to_string()]).to_string(),
            "[c01, c02]"
        );
        assert_eq!(Cell::List(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_customer_view_rows() {
        let registry = reconciled_registry();
        let view = CustomerView::new(&registry);

        assert_eq!(
            view.header(),
            &["Customer Name", "Product", "Quantity Purchased"]
        );
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(
            rows,
            vec![
                vec![text("Debugging Dinesh"), text("p00"), Cell::Quantity(4)],
                vec![text("Debugging Dinesh"), text("p01"), Cell::Quantity(10)],
                vec![text("Debugging Dinesh"), text("p03"), Cell::Quantity(1)],
                vec![text("GitHub Gus"), text("p00"), Cell::Quantity(2)],
            ]
        );
    }

    #[test]
    fn test_store_view_rows() {
        let registry = reconciled_registry();
        let view = StoreView::new(&registry);

        assert_eq!(
            view.header(),
            &["Store", "Products", "Customers", "Quantity Sold"]
        );
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(
            rows,
            vec![
                vec![
                    text("Maha's Movies"),
                    text("p00"),
                    Cell::List(vec!["c01".to_string(), "c02".to_string()]),
                    Cell::Quantity(6),
                ],
                vec![
                    text("Maha's Movies"),
                    text("p01"),
                    Cell::List(vec!["c01".to_string()]),
                    Cell::Quantity(10),
                ],
                vec![
                    text("Ben's Books"),
                    text("p03"),
                    Cell::List(vec!["c01".to_string()]),
                    Cell::Quantity(1),
                ],
            ]
        );
    }

    #[test]
    fn test_views_are_repeatable() {
        let registry = reconciled_registry();
        let customers = CustomerView::new(&registry);
        let stores = StoreView::new(&registry);

        assert_eq!(
            customers.rows().collect::<Vec<_>>(),
            customers.rows().collect::<Vec<_>>()
        );
        assert_eq!(
            stores.rows().collect::<Vec<_>>(),
            stores.rows().collect::<Vec<_>>()
        );
        assert_eq!(customers.header(), customers.header());
    }

    #[test]
    fn test_empty_registry_has_no_rows() {
        let registry = Registry::new();
        assert_eq!(CustomerView::new(&registry).rows().count(), 0);
        assert_eq!(StoreView::new(&registry).rows().count(), 0);
    }
}
