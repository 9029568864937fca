//! # fieldconfigs-csv
//!
//! CSV reader and writer for [`TransposedTable`](fieldconfigs_core::TransposedTable).

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
