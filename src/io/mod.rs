//! I/O module
//!
//! Handles flat-file parsing and report output.
//!
//! # Components
//!
//! - `record_reader` - Fixed-arity delimited reader with iterator interface
//! - `report_format` - Text table and CSV rendering of report views

pub mod record_reader;
pub mod report_format;

pub use record_reader::{RawRecord, RecordReader};
pub use report_format::{write_csv, write_report, write_table};
