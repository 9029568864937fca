//! Dense cell grid for a single worksheet

use crate::cell::{CellAddress, CellValue};

/// Row-major grid of cell values, anchored at cell A1.
///
/// Rows may have different lengths; reading past the end of a row yields
/// [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

static EMPTY: CellValue = CellValue::Empty;

impl SheetGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from nested rows
    pub fn from_rows<I, R, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Set a value at 0-based row and column, growing the grid as needed
    pub fn set<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) {
        let row = row as usize;
        let col = col as usize;
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = value.into();
    }

    /// Set a value at a parsed address
    pub fn set_at<V: Into<CellValue>>(&mut self, addr: CellAddress, value: V) {
        self.set(addr.row, addr.col, value);
    }

    /// Get the value at 0-based row and column
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Get a full row, if present
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Number of rows (including blank rows before the last populated one)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check whether a row has no non-empty values
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .map_or(true, |cells| cells.iter().all(CellValue::is_empty))
    }


    /// Check if the grid holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_grows_grid() {
        let mut grid = SheetGrid::new();
        grid.set(2, 3, 1.5);

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.get(2, 3), &CellValue::Number(1.5));
        assert_eq!(grid.get(0, 0), &CellValue::Empty);
        assert_eq!(grid.get(10, 10), &CellValue::Empty);
    }

    #[test]
    fn test_blank_text_rows_count_as_empty() {
        let mut grid = SheetGrid::from_rows(vec![vec!["a"], vec![""], vec!["b"]]);
        grid.set(5, 0, "");

        assert_eq!(grid.row_count(), 6);
        assert!(grid.is_row_empty(1));
        assert!(!grid.is_row_empty(2));
        assert!(grid.is_row_empty(4));
        assert!(grid.is_row_empty(5));
        assert!(grid.is_row_empty(99));
    }

    #[test]
    fn test_set_at_address() {
        let mut grid = SheetGrid::new();
        grid.set_at(CellAddress::parse("B2").unwrap(), "x");
        assert_eq!(grid.get(1, 1), &CellValue::text("x"));
    }
}
