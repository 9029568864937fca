//! # fieldconfigs-core
//!
//! Core data structures for the fieldconfigs converter.
//!
//! This crate provides the types shared by the readers, writers and the
//! conversion pipeline:
//! - [`CellValue`] - A single spreadsheet value (text, number, boolean or blank)
//! - [`CellAddress`] - A cell's location (e.g., "B3")
//! - [`SheetGrid`] - The dense cell grid of one worksheet
//! - [`ConfigTable`] - Configuration records keyed by their `Name` column
//! - [`TransposedTable`] - The same table with rows and columns swapped
//!
//! ## Example
//!
//! ```rust
//! use fieldconfigs_core::{CellValue, ConfigTable, LoadOptions, SheetGrid};
//!
//! let mut grid = SheetGrid::new();
//! grid.set(0, 0, "Name");
//! grid.set(0, 1, "Depth");
//! grid.set(1, 0, "A");
//! grid.set(1, 1, 10.0);
//! grid.set(2, 0, "B");
//!
//! let table = ConfigTable::from_grid(&grid, &LoadOptions::default()).unwrap();
//! assert_eq!(table.value("A", "Depth"), Some(&CellValue::Number(10.0)));
//! assert_eq!(table.value("B", "Depth"), Some(&CellValue::Empty));
//!
//! let transposed = table.transpose();
//! assert_eq!(transposed.headers(), ["A", "B"]);
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod table;
pub mod transpose;

// Re-exports for convenience
pub use cell::{CellAddress, CellValue};
pub use error::{Error, Result};
pub use grid::SheetGrid;
pub use table::{ConfigRecord, ConfigTable, DuplicateNames, LoadOptions};
pub use transpose::{TransposedRow, TransposedTable};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Number of data rows read below the header row
pub const DEFAULT_MAX_ROWS: usize = 45;

/// Name of the column that keys every configuration record
pub const DEFAULT_INDEX_COLUMN: &str = "Name";

/// Columns whose header contains this marker are dropped
pub const DEFAULT_EXCLUDE_MARKER: &str = "Unnamed";
