//! Row/column swap of a [`ConfigTable`]

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::table::ConfigTable;

/// One original column laid out as a row
#[derive(Debug, Clone, PartialEq)]
pub struct TransposedRow {
    label: String,
    values: Vec<CellValue>,
}

impl TransposedRow {
    /// Create a row
    pub fn new<S: Into<String>>(label: S, values: Vec<CellValue>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// The original column header
    pub fn label(&self) -> &str {
        &self.label
    }

    /// One value per configuration name
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }
}

/// A [`ConfigTable`] with configuration names across the top and one row per
/// original column
#[derive(Debug, Clone, PartialEq)]
pub struct TransposedTable {
    corner: String,
    headers: Vec<String>,
    rows: Vec<TransposedRow>,
}

impl TransposedTable {
    /// Assemble a table from parts, checking that every row matches the header
    /// count
    pub fn new<S: Into<String>>(
        corner: S,
        headers: Vec<String>,
        rows: Vec<TransposedRow>,
    ) -> Result<Self> {
        for row in &rows {
            if row.values.len() != headers.len() {
                return Err(Error::RaggedRecord {
                    name: row.label.clone(),
                    expected: headers.len(),
                    found: row.values.len(),
                });
            }
        }
        Ok(Self {
            corner: corner.into(),
            headers,
            rows,
        })
    }

    /// Label of the top-left header cell (the original key column)
    pub fn corner(&self) -> &str {
        &self.corner
    }

    /// Configuration names, one per data column
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in original column order
    pub fn rows(&self) -> &[TransposedRow] {
        &self.rows
    }

    /// Row for an original column header
    pub fn row(&self, label: &str) -> Option<&TransposedRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Value of original column `label` for configuration `header`
    pub fn value(&self, label: &str, header: &str) -> Option<&CellValue> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.row(label).and_then(|r| r.values.get(col))
    }
}

impl ConfigTable {
    /// Swap rows and columns: each column becomes a row labelled with its
    /// header and each record name becomes a column header
    pub fn transpose(&self) -> TransposedTable {
        let headers: Vec<String> = self.names().map(str::to_string).collect();

        let rows = self
            .columns()
            .iter()
            .enumerate()
            .map(|(col, label)| TransposedRow {
                label: label.clone(),
                values: self
                    .records()
                    .iter()
                    .map(|record| record.values()[col].clone())
                    .collect(),
            })
            .collect();

        TransposedTable {
            corner: self.index_name().to_string(),
            headers,
            rows,
        }
    }
}
