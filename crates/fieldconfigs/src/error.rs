//! Error types for a conversion run

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::locate::LocateError;
use crate::snapshot::SnapshotError;
use fieldconfigs_csv::CsvError;
use fieldconfigs_xlsx::XlsxError;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a conversion run
#[derive(Debug, Error)]
pub enum Error {
    /// Input or output paths could not be resolved
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The workbook could not be read
    #[error("failed to read workbook {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },

    /// The worksheet does not form a valid configuration table
    #[error("invalid configuration table in {}: {source}", .path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: fieldconfigs_core::Error,
    },

    /// The transposed CSV could not be written
    #[error("failed to write {}: {source}", .path.display())]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: CsvError,
    },

    /// The snapshot could not be written or read
    #[error("snapshot {}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
}

impl Error {
    /// Whether the run failed because a file or directory does not exist
    pub fn is_not_found(&self) -> bool {
        let io = match self {
            Error::Read {
                source: XlsxError::Io(e),
                ..
            } => e,
            Error::WriteCsv {
                source: CsvError::Io(e),
                ..
            } => e,
            Error::Snapshot {
                source: SnapshotError::Io(e),
                ..
            } => e,
            _ => return false,
        };
        io.kind() == io::ErrorKind::NotFound
    }
}
