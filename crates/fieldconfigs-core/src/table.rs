//! Configuration table keyed by the `Name` column
//!
//! A [`ConfigTable`] is built once from the first rows of a worksheet and is
//! read-only afterwards. Header rules:
//!
//! - blank header cells are named `Unnamed: <col>` and therefore dropped
//! - repeated header names are suffixed `.1`, `.2`, ...
//! - any header containing the exclude marker is dropped
//! - blank data cells are kept as [`CellValue::Empty`]

use ahash::{AHashMap, AHashSet};

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::grid::SheetGrid;
use crate::{DEFAULT_EXCLUDE_MARKER, DEFAULT_INDEX_COLUMN, DEFAULT_MAX_ROWS};

/// What to do when two records share a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateNames {
    /// Fail the load with [`Error::DuplicateName`]
    #[default]
    Reject,
    /// Keep every record and log a warning; lookups return the first match
    Allow,
}

/// Options controlling how a grid becomes a [`ConfigTable`]
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Data rows read below the header row
    pub max_rows: usize,
    /// Columns whose header contains this substring are dropped
    pub exclude_marker: String,
    /// Header of the key column
    pub index_column: String,
    /// Duplicate key policy
    pub duplicate_names: DuplicateNames,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            exclude_marker: DEFAULT_EXCLUDE_MARKER.to_string(),
            index_column: DEFAULT_INDEX_COLUMN.to_string(),
            duplicate_names: DuplicateNames::default(),
        }
    }
}

/// One configuration: its name and one value per table column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigRecord {
    name: String,
    values: Vec<CellValue>,
}

impl ConfigRecord {
    /// Create a record
    pub fn new<S: Into<String>>(name: S, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The record's key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in table column order
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

/// Configuration records indexed by name
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigTable {
    index_name: String,
    columns: Vec<String>,
    records: Vec<ConfigRecord>,
}

impl ConfigTable {
    /// Assemble a table from parts, checking that every record matches the
    /// column count
    pub fn new<S: Into<String>>(
        index_name: S,
        columns: Vec<String>,
        records: Vec<ConfigRecord>,
    ) -> Result<Self> {
        let table = Self {
            index_name: index_name.into(),
            columns,
            records,
        };
        table.validate()?;
        Ok(table)
    }

    /// Build a table from a worksheet grid whose first row holds the headers
    pub fn from_grid(grid: &SheetGrid, options: &LoadOptions) -> Result<Self> {
        if grid.is_empty() {
            return Err(Error::MissingHeader);
        }

        let headers = header_names(grid);

        let retained: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.contains(options.exclude_marker.as_str()))
            .map(|(col, _)| col)
            .collect();

        let index_col = retained
            .iter()
            .copied()
            .find(|&col| headers[col] == options.index_column)
            .ok_or_else(|| Error::MissingIndexColumn(options.index_column.clone()))?;

        let value_cols: Vec<usize> = retained
            .iter()
            .copied()
            .filter(|&col| col != index_col)
            .collect();

        // Read window first, then drop blank rows at its bottom edge.
        let mut last_row = grid.row_count().min(options.max_rows.saturating_add(1));
        while last_row > 1 && grid.is_row_empty(last_row - 1) {
            last_row -= 1;
        }

        let mut seen: AHashMap<String, usize> = AHashMap::new();
        let mut records = Vec::with_capacity(last_row.saturating_sub(1));

        for row in 1..last_row {
            let name = grid.get(row, index_col).to_string();

            if let Some(&first) = seen.get(&name) {
                match options.duplicate_names {
                    DuplicateNames::Reject => {
                        return Err(Error::DuplicateName {
                            name,
                            first: first + 1,
                            second: row + 1,
                        });
                    }
                    DuplicateNames::Allow => {
                        tracing::warn!(
                            name = %name,
                            first_row = first + 1,
                            row = row + 1,
                            "duplicate configuration name kept"
                        );
                    }
                }
            } else {
                seen.insert(name.clone(), row);
            }

            let values = value_cols
                .iter()
                .map(|&col| grid.get(row, col).clone())
                .collect();
            records.push(ConfigRecord { name, values });
        }

        let columns = value_cols.iter().map(|&col| headers[col].clone()).collect();

        tracing::debug!(
            records = records.len(),
            dropped_columns = headers.len() - retained.len(),
            "built configuration table"
        );

        Ok(Self {
            index_name: options.index_column.clone(),
            columns,
            records,
        })
    }

    /// Check that every record holds one value per column
    pub fn validate(&self) -> Result<()> {
        for record in &self.records {
            if record.values.len() != self.columns.len() {
                return Err(Error::RaggedRecord {
                    name: record.name.clone(),
                    expected: self.columns.len(),
                    found: record.values.len(),
                });
            }
        }
        Ok(())
    }

    /// Header of the key column
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Column headers, excluding the key column
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records in sheet order
    pub fn records(&self) -> &[ConfigRecord] {
        &self.records
    }

    /// Record names in sheet order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(ConfigRecord::name)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column header
    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// First record with the given name
    pub fn get(&self, name: &str) -> Option<&ConfigRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Value of `column` for the record named `name`
    pub fn value(&self, name: &str, column: &str) -> Option<&CellValue> {
        let col = self.column_position(column)?;
        self.get(name).and_then(|r| r.values.get(col))
    }
}

/// Header names for every grid column, blank ones named `Unnamed: <col>` and
/// repeats suffixed with `.N`
fn header_names(grid: &SheetGrid) -> Vec<String> {
    let mut taken: AHashSet<String> = AHashSet::new();
    let mut counts: AHashMap<String, usize> = AHashMap::new();
    let mut names = Vec::with_capacity(grid.width());

    for col in 0..grid.width() {
        let cell = grid.get(0, col);
        let base = if cell.is_empty() {
            format!("Unnamed: {}", col)
        } else {
            cell.to_string()
        };

        let mut name = base.clone();
        if taken.contains(&name) {
            let n = counts.entry(base.clone()).or_insert(0);
            loop {
                *n += 1;
                name = format!("{}.{}", base, n);
                if !taken.contains(&name) {
                    break;
                }
            }
        }

        taken.insert(name.clone());
        names.push(name);
    }

    names
}
