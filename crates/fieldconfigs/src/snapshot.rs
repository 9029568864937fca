//! Binary snapshot of a [`ConfigTable`]
//!
//! Layout: the six magic bytes `FCSNAP`, one format version byte, then the
//! table as JSON. Readers reject unknown versions instead of guessing.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;

use fieldconfigs_core::{CellValue, ConfigTable};

/// Leading bytes of every snapshot
pub const SNAPSHOT_MAGIC: &[u8; 6] = b"FCSNAP";

/// Format version written by this crate
pub const SNAPSHOT_VERSION: u8 = 1;

/// Errors from snapshot encoding and decoding
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("not a configuration snapshot")]
    BadMagic,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),

    #[error("malformed snapshot body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot store non-finite number in '{name}' / '{column}'")]
    NonFiniteNumber { name: String, column: String },

    #[error("snapshot holds an inconsistent table: {0}")]
    Core(#[from] fieldconfigs_core::Error),
}

/// Encode a table into a writer
///
/// JSON has no NaN or infinity, so tables holding them are refused before
/// anything is written.
pub fn write_snapshot<W: Write>(table: &ConfigTable, mut writer: W) -> Result<(), SnapshotError> {
    check_finite(table)?;
    writer.write_all(SNAPSHOT_MAGIC)?;
    writer.write_all(&[SNAPSHOT_VERSION])?;
    serde_json::to_writer(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Decode a table from a reader
pub fn read_snapshot<R: Read>(mut reader: R) -> Result<ConfigTable, SnapshotError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Encode a table into a file, replacing any existing one
pub fn write_snapshot_file<P: AsRef<Path>>(
    table: &ConfigTable,
    path: P,
) -> Result<(), SnapshotError> {
    let file = io::BufWriter::new(fs::File::create(path)?);
    write_snapshot(table, file)
}

/// Decode a table from a file
pub fn read_snapshot_file<P: AsRef<Path>>(path: P) -> Result<ConfigTable, SnapshotError> {
    decode(&fs::read(path)?)
}

fn check_finite(table: &ConfigTable) -> Result<(), SnapshotError> {
    for record in table.records() {
        for (column, value) in table.columns().iter().zip(record.values()) {
            if let CellValue::Number(n) = value {
                if !n.is_finite() {
                    return Err(SnapshotError::NonFiniteNumber {
                        name: record.name().to_string(),
                        column: column.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn decode(bytes: &[u8]) -> Result<ConfigTable, SnapshotError> {
    let header_len = SNAPSHOT_MAGIC.len();
    if bytes.len() < header_len || &bytes[..header_len] != SNAPSHOT_MAGIC {
        return Err(SnapshotError::BadMagic);
    }

    match bytes.get(header_len) {
        Some(&SNAPSHOT_VERSION) => {}
        Some(&other) => return Err(SnapshotError::UnsupportedVersion(other)),
        None => {
            return Err(SnapshotError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "snapshot ends before the version byte",
            )))
        }
    }

    let table: ConfigTable = serde_json::from_slice(&bytes[header_len + 1..])?;
    table.validate()?;
    Ok(table)
}
