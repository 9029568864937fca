//! # fieldconfigs-xlsx
//!
//! XLSX (Office Open XML) reader and writer for fieldconfigs.
//!
//! The reader loads one worksheet into a [`SheetGrid`](fieldconfigs_core::SheetGrid),
//! optionally stopping after a fixed number of rows. The writer produces a
//! single-sheet workbook and exists mainly to build fixtures.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::{ReadOptions, SheetSelector, XlsxReader};
pub use writer::XlsxWriter;
