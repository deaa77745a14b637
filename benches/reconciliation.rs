//! Benchmark suite for the import and reconciliation pipeline
//!
//! Uses the divan benchmarking framework over generated data directories.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each generated directory has 50 customers and 10 stores carrying 20
//! products each; the transaction count varies per benchmark. Stock is sized
//! so that later transactions regularly hit shortfalls.

use retail_reconciler::cli::ReportFormat;
use retail_reconciler::io::write_report;
use retail_reconciler::pipeline::Importer;
use std::fmt::Write as _;
use std::fs;
use tempfile::TempDir;

const CUSTOMERS: usize = 50;
const STORES: usize = 10;
const PRODUCTS_PER_STORE: usize = 20;

fn main() {
    divan::main();
}

/// Write a data directory with the given number of transactions
fn generate(transactions: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut customers = String::new();
    for c in 0..CUSTOMERS {
        writeln!(customers, "c{c:03},Customer {c}").unwrap();
    }

    let mut stores = String::from("id*name\n");
    let mut products = String::new();
    let mut inventory = String::from("store|quantity|product\n");
    for s in 0..STORES {
        writeln!(stores, "s{s:02}*Store {s}").unwrap();
        for p in 0..PRODUCTS_PER_STORE {
            let product = s * PRODUCTS_PER_STORE + p;
            writeln!(products, "p{product:04}|s{s:02}|Product {product}").unwrap();
            writeln!(inventory, "s{s:02}|{}|p{product:04}", 10 + p * 5).unwrap();
        }
    }

    let mut txs = String::from("customer|quantity|product|store\n");
    for t in 0..transactions {
        let s = t % STORES;
        let product = s * PRODUCTS_PER_STORE + (t / STORES) % PRODUCTS_PER_STORE;
        writeln!(txs, "c{:03}|{}|p{product:04}|s{s:02}", t % CUSTOMERS, 1 + t % 7).unwrap();
    }

    for (name, content) in [
        ("customers.txt", customers),
        ("stores.txt", stores),
        ("products.txt", products),
        ("inventory.txt", inventory),
        ("transactions.txt", txs),
    ] {
        fs::write(dir.path().join(name), content).expect("Failed to write source");
    }
    dir
}

/// Import and reconcile a generated directory
#[divan::bench(args = [100, 1_000, 100_000])]
fn reconcile(bencher: divan::Bencher, transactions: usize) {
    let dir = generate(transactions);
    bencher.bench(|| {
        Importer::default()
            .run(dir.path())
            .expect("Reconciliation failed")
    });
}

/// Render both reports for an already reconciled directory
#[divan::bench(args = [ReportFormat::Table, ReportFormat::Csv])]
fn render_reports(bencher: divan::Bencher, format: ReportFormat) {
    let dir = generate(10_000);
    let ledger = Importer::default()
        .run(dir.path())
        .expect("Reconciliation failed");

    bencher.bench(|| {
        let mut output = Vec::new();
        write_report(&ledger.store_view(), format, &mut output).expect("Rendering failed");
        write_report(&ledger.customer_view(), format, &mut output).expect("Rendering failed");
        output
    });
}
