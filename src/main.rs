//! Retail Reconciler CLI
//!
//! Command-line interface for reconciling a directory of flat files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data/
//! cargo run -- --format csv data/ > summary.csv
//! cargo run -- --strict --reject-duplicates data/
//! RUST_LOG=warn cargo run -- data/
//! ```
//!
//! The program imports customers, stores, products, inventory and
//! transactions from the data directory, reconciles purchases against stock,
//! and writes the store summary followed by the customer summary to stdout.
//! Per-transaction notices and import diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (unknown customer or store, rejected duplicate, strict-mode input error)

use retail_reconciler::cli;
use retail_reconciler::io::write_report;
use retail_reconciler::pipeline::Importer;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();

    let ledger = match Importer::new(args.to_import_config()).run(&args.data_dir) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout().lock();
    let reports = write_report(&ledger.store_view(), args.format, &mut output)
        .and_then(|_| write_report(&ledger.customer_view(), args.format, &mut output));
    if let Err(e) = reports {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
