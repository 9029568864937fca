//! Workbook to [`ConfigTable`]

use std::path::Path;

use fieldconfigs_core::{ConfigTable, LoadOptions};
use fieldconfigs_xlsx::{ReadOptions, SheetSelector, XlsxReader};

use crate::error::{Error, Result};

/// Read the configuration table from one worksheet of a workbook
///
/// Only the header row and the first `options.max_rows` data rows are
/// parsed; anything below is never decoded.
pub fn load_config_table<P: AsRef<Path>>(
    path: P,
    sheet: &SheetSelector,
    options: &LoadOptions,
) -> Result<ConfigTable> {
    let path = path.as_ref();

    let read_options = ReadOptions {
        sheet: sheet.clone(),
        max_rows: u32::try_from(options.max_rows.saturating_add(1)).ok(),
    };

    let grid = XlsxReader::read_file(path, &read_options).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(rows = grid.row_count(), width = grid.width(), "read worksheet");

    ConfigTable::from_grid(&grid, options).map_err(|source| Error::Table {
        path: path.to_path_buf(),
        source,
    })
}
