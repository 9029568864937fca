//! # fieldconfigs
//!
//! Turns the field configuration workbook (`FieldConfigs.xlsx`) into the two
//! fixtures the test graphs consume:
//!
//! - `FieldConfigs.csv`: the table transposed so each configuration is a
//!   column
//! - `FieldConfigs.pkl`: a typed snapshot of the untransposed table
//!
//! Paths depend on where the run happens. In CI they hang off the workspace
//! root variable; on a developer checkout they hang off the `FieldNBalance`
//! directory found in the working directory.
//!
//! ## Example
//!
//! ```no_run
//! use fieldconfigs::prelude::*;
//!
//! let converter = Converter::new(Settings::default());
//! let locations = converter.locate()?;
//! let report = converter.run(&locations)?;
//! println!("{} configurations", report.records);
//! # Ok::<(), fieldconfigs::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod load;
pub mod locate;
pub mod prelude;
pub mod settings;
pub mod snapshot;

pub use convert::{ConversionReport, Converter};
pub use error::{Error, Result};
pub use load::load_config_table;
pub use locate::{
    detect_context, find_project_root, is_truthy, resolve, Environment, LocateError, Locations,
    ProcessEnv, RunContext,
};
pub use settings::Settings;
pub use snapshot::{
    read_snapshot, read_snapshot_file, write_snapshot, write_snapshot_file, SnapshotError,
};

// Re-export core types
pub use fieldconfigs_core::{
    CellAddress, CellValue, ConfigRecord, ConfigTable, DuplicateNames, LoadOptions, SheetGrid,
    TransposedRow, TransposedTable, DEFAULT_EXCLUDE_MARKER, DEFAULT_INDEX_COLUMN,
    DEFAULT_MAX_ROWS,
};

// Re-export I/O types
pub use fieldconfigs_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
pub use fieldconfigs_xlsx::{ReadOptions, SheetSelector, XlsxError, XlsxReader, XlsxWriter};
