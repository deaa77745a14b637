//! Import pipeline module
//!
//! Runs the five import steps against a data directory in their fixed order
//! (customers, stores, products, inventory, transactions), applying the
//! failure policy:
//!
//! - A missing file is reported and its step yields no records
//! - A malformed line abandons the rest of that file; later steps still run
//! - An unresolved reference or broken invariant stops the run
//!
//! Strict mode turns the first two into run-stopping errors as well.

mod importer;

pub use importer::Importer;

use crate::core::{DuplicatePolicy, Registry};
use crate::report::{CustomerView, StoreView};
use crate::types::{LedgerError, SourceFile};

/// Import behaviour, built from CLI arguments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportConfig {
    /// Abort on malformed lines and missing files
    pub strict: bool,

    /// How repeated customer and store ids are handled
    pub duplicates: DuplicatePolicy,
}

/// How one import step ended
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Every line of the file was applied
    Completed { records: usize },
    /// A malformed line stopped the step after `records` were applied
    Abandoned { records: usize, error: LedgerError },
    /// The file could not be opened
    Missing { path: String },
}

/// Per-step outcomes of one run, in import order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSummary {
    steps: Vec<(SourceFile, StepOutcome)>,
}

impl ImportSummary {
    pub(crate) fn record(&mut self, source: SourceFile, outcome: StepOutcome) {
        self.steps.push((source, outcome));
    }

    /// Outcome of a step, if it ran
    pub fn outcome(&self, source: SourceFile) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == source)
            .map(|(_, outcome)| outcome)
    }

    /// All outcomes in import order
    pub fn steps(&self) -> &[(SourceFile, StepOutcome)] {
        &self.steps
    }

    /// Whether every step completed
    pub fn is_clean(&self) -> bool {
        self.steps
            .iter()
            .all(|(_, outcome)| matches!(outcome, StepOutcome::Completed { .. }))
    }
}

/// Reconciled state of one run
#[derive(Debug)]
pub struct Ledger {
    pub registry: Registry,
    pub summary: ImportSummary,
}

impl Ledger {
    /// Per-customer purchase report
    pub fn customer_view(&self) -> CustomerView<'_> {
        CustomerView::new(&self.registry)
    }

    /// Per-store sales report
    pub fn store_view(&self) -> StoreView<'_> {
        StoreView::new(&self.registry)
    }
}
