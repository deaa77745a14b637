//! Fixed-arity delimited record reader with iterator interface
//!
//! Provides a streaming iterator over the lines of one flat-file source.
//! Every line must split into exactly the number of fields the source
//! declares; anything else is reported with the file name, the line number
//! and both field counts.
//!
//! # Design
//!
//! The RecordReader walks physical lines itself and splits each one on the
//! source separator into a csv::StringRecord: there is no quoting, fields are
//! not trimmed, and a blank line is a one-field record like any other. The
//! header line is validated and counted before it is discarded.
//!
//! ```no_run
//! use retail_reconciler::io::RecordReader;
//! use retail_reconciler::types::{SourceFile, StoreRecord};
//! use std::path::Path;
//!
//! let reader = RecordReader::open(Path::new("data/stores.txt"), SourceFile::Stores).unwrap();
//! for store in reader.typed::<StoreRecord>() {
//!     match store {
//!         Ok(store) => println!("{} => {}", store.id, store.name),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Open failures are returned from `open()` as `FileNotFound`
//! - A malformed line is yielded once as an Err; the iterator is exhausted afterwards
//! - Line numbers are physical, 1-based, and include any header line

use crate::types::{LedgerError, SourceFile};
use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// One validated line from a source
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// 1-based physical line number
    pub line: u64,
    fields: StringRecord,
}

impl RawRecord {
    /// The fields of the line, in order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter()
    }

    /// Decode the fields positionally into a typed record
    pub fn deserialize<T: DeserializeOwned>(&self, file: &str) -> Result<T, LedgerError> {
        self.fields
            .deserialize(None)
            .map_err(|e| LedgerError::InvalidField {
                file: file.to_string(),
                line: self.line,
                message: describe(&e),
            })
    }
}

/// Lazy reader over one delimited source
///
/// Finite and non-restartable: once the underlying reader is exhausted or an
/// error has been yielded, `next()` keeps returning `None`.
#[derive(Debug)]
pub struct RecordReader<R> {
    reader: BufReader<R>,
    file: String,
    separator: char,
    arity: usize,
    line: u64,
    buf: String,
    skip_header: bool,
    finished: bool,
}

impl RecordReader<File> {
    /// Open a source file from disk
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the file cannot be opened for any reason.
    pub fn open(path: &Path, source: SourceFile) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|_| LedgerError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Ok(Self::for_source(file, source))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader using the layout of a known source
    pub fn for_source(reader: R, source: SourceFile) -> Self {
        Self::new(
            reader,
            source.file_name(),
            source.separator(),
            source.arity(),
            source.has_header(),
        )
    }

    /// Wrap any reader with an explicit layout
    ///
    /// # Arguments
    ///
    /// * `reader` - Byte source to split into lines
    /// * `file` - Name used in error messages
    /// * `separator` - Field separator byte
    /// * `arity` - Number of fields every line must carry
    /// * `has_header` - Discard the first line after validating it
    pub fn new(
        reader: R,
        file: impl Into<String>,
        separator: u8,
        arity: usize,
        has_header: bool,
    ) -> Self {
        RecordReader {
            reader: BufReader::new(reader),
            file: file.into(),
            separator: char::from(separator),
            arity,
            line: 0,
            buf: String::new(),
            skip_header: has_header,
            finished: false,
        }
    }

    /// Name of the source used in error messages
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Decode every record into `T`, stopping at the first failure
    pub fn typed<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T, LedgerError>> {
        let file = self.file.clone();
        self.map(move |raw| raw.and_then(|raw| raw.deserialize(&file)))
    }

    fn read_next(&mut self) -> Result<Option<RawRecord>, LedgerError> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_line(&mut self.buf)
                .map_err(|e| self.read_error(e))?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
            let text = text.strip_suffix('\r').unwrap_or(text);
            let fields: StringRecord = text.split(self.separator).collect();

            let line = self.line;
            if fields.len() != self.arity {
                return Err(LedgerError::malformed_record(
                    &self.file,
                    line,
                    fields.len(),
                    self.arity,
                ));
            }

            if self.skip_header {
                self.skip_header = false;
                continue;
            }

            return Ok(Some(RawRecord { line, fields }));
        }
    }

    fn read_error(&self, error: io::Error) -> LedgerError {
        match error.kind() {
            io::ErrorKind::InvalidData => LedgerError::InvalidField {
                file: self.file.clone(),
                line: self.line + 1,
                message: error.to_string(),
            },
            _ => error.into(),
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_next() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Strip the csv crate's positional prefix; callers add their own file/line
fn describe(error: &csv::Error) -> String {
    match error.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => error.to_string(),
    }
}
