//! Error types for fieldconfigs-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fieldconfigs-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// The sheet has no header row to take column names from
    #[error("Sheet has no header row")]
    MissingHeader,

    /// The key column is not among the retained headers
    #[error("Index column '{0}' not found in header row")]
    MissingIndexColumn(String),

    /// Two records share a key
    #[error("Duplicate value '{name}' in index column (rows {first} and {second})")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    /// A record's value count does not match the table's columns
    #[error("Record '{name}' has {found} values, expected {expected}")]
    RaggedRecord {
        name: String,
        expected: usize,
        found: usize,
    },
}
