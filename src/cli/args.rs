use crate::core::DuplicatePolicy;
use crate::pipeline::ImportConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Reconcile store inventory against customer purchases
#[derive(Parser, Debug)]
#[command(name = "retail-reconciler")]
#[command(about = "Reconcile store inventory against customer purchases", long_about = None)]
pub struct CliArgs {
    /// Directory holding customers.txt, stores.txt, products.txt, inventory.txt and transactions.txt
    #[arg(value_name = "DATA_DIR", help = "Directory containing the input files")]
    pub data_dir: PathBuf,

    /// Output format for both summary reports
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "table",
        help = "Report format: 'table' for aligned text or 'csv'"
    )]
    pub format: ReportFormat,

    /// Abort on malformed lines and missing files instead of skipping them
    #[arg(long = "strict")]
    pub strict: bool,

    /// Treat a repeated customer or store id as a fatal error
    #[arg(long = "reject-duplicates")]
    pub reject_duplicates: bool,
}

/// Available report renderings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
}

impl CliArgs {
    /// Create an ImportConfig from CLI arguments
    pub fn to_import_config(&self) -> ImportConfig {
        ImportConfig {
            strict: self.strict,
            duplicates: if self.reject_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::LastWriteWins
            },
        }
    }
}
