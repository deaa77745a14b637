//! Import pipeline driver
//!
//! Coordinates the RecordReader (input), the Registry and CatalogLoader
//! (entity state) and the ReconciliationEngine (transactions) for one data
//! directory. Each step owns its reader, so every file handle is released as
//! soon as its step finishes or is abandoned.

use crate::core::{CatalogLoader, ReconciliationEngine, Registry};
use crate::io::RecordReader;
use crate::pipeline::{ImportConfig, ImportSummary, Ledger, StepOutcome};
use crate::types::{
    CustomerRecord, InventoryRecord, LedgerError, ProductRecord, SourceFile, StoreRecord,
    TransactionRecord,
};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Runs the full import and reconciliation pass
///
/// # Examples
///
/// ```no_run
/// use retail_reconciler::pipeline::{ImportConfig, Importer};
/// use std::path::Path;
///
/// let ledger = Importer::new(ImportConfig::default())
///     .run(Path::new("data"))
///     .expect("Reconciliation failed");
/// println!("{} customers loaded", ledger.registry.customer_count());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Importer {
    config: ImportConfig,
}

impl Importer {
    pub fn new(config: ImportConfig) -> Self {
        Importer { config }
    }

    /// Import every source under `data_dir` and reconcile the transactions
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: an unknown customer or store, a
    /// rejected duplicate id, an overflowing quantity, or (in strict mode) a
    /// missing file or malformed line. No partial ledger is returned.
    pub fn run(&self, data_dir: &Path) -> Result<Ledger, LedgerError> {
        let mut registry = Registry::with_policy(self.config.duplicates);
        let mut summary = ImportSummary::default();

        self.import(data_dir, SourceFile::Customers, &mut summary, |r: CustomerRecord| {
            registry.add_customer(r)
        })?;
        self.import(data_dir, SourceFile::Stores, &mut summary, |r: StoreRecord| {
            registry.add_store(r)
        })?;

        let mut catalog = CatalogLoader::new(&mut registry);
        self.import(data_dir, SourceFile::Products, &mut summary, |r: ProductRecord| {
            catalog.add_product(&r)
        })?;
        self.import(data_dir, SourceFile::Inventory, &mut summary, |r: InventoryRecord| {
            catalog.add_inventory(&r)
        })?;

        let mut engine = ReconciliationEngine::new(registry);
        self.import(
            data_dir,
            SourceFile::Transactions,
            &mut summary,
            |r: TransactionRecord| engine.process(r).map(|_| ()),
        )?;

        Ok(Ledger {
            registry: engine.into_registry(),
            summary,
        })
    }

    /// Stream one source through `apply`, recording how the step ended
    fn import<T, F>(
        &self,
        data_dir: &Path,
        source: SourceFile,
        summary: &mut ImportSummary,
        mut apply: F,
    ) -> Result<(), LedgerError>
    where
        T: DeserializeOwned,
        F: FnMut(T) -> Result<(), LedgerError>,
    {
        let path = data_dir.join(source.file_name());
        let reader = match RecordReader::open(&path, source) {
            Ok(reader) => reader,
            Err(e) if self.config.strict => return Err(e),
            Err(e) => {
                log::warn!("{}; continuing without it", e);
                summary.record(
                    source,
                    StepOutcome::Missing {
                        path: path.display().to_string(),
                    },
                );
                return Ok(());
            }
        };

        let mut records = 0;
        for record in reader.typed::<T>() {
            match record.and_then(&mut apply) {
                Ok(()) => records += 1,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => return self.abandon(source, records, e, summary),
            }
        }

        log::info!("Loaded {} records from {}", records, source.file_name());
        summary.record(source, StepOutcome::Completed { records });
        Ok(())
    }

    fn abandon(
        &self,
        source: SourceFile,
        records: usize,
        error: LedgerError,
        summary: &mut ImportSummary,
    ) -> Result<(), LedgerError> {
        if self.config.strict {
            return Err(error);
        }
        log::error!(
            "{}; skipping the rest of {} after {} records",
            error,
            source.file_name(),
            records
        );

        summary.record(source, StepOutcome::Abandoned { records, error });
        Ok(())
    }
}
