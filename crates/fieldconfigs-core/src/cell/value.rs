//! Cell value types

use std::fmt;

/// Represents the value stored in a cell
///
/// Blank cells stay [`CellValue::Empty`] all the way through the pipeline and
/// render as an empty string; they are never replaced by a missing-value
/// sentinel.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Text value, including error literals such as `#N/A`
    Text(String),

    /// Numeric value (all numbers stored as f64)
    Number(f64),

    /// Boolean value
    Boolean(bool),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    ///
    /// An empty string counts as empty: spreadsheets do not distinguish it
    /// from a blank cell once written out.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Render a number the way it is written to text outputs.
///
/// Whole numbers drop the fractional part (`10`, not `10.0`); everything else
/// uses the shortest representation that parses back to the same value.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Boolean(b) => f.write_str(if *b { "True" } else { "False" }),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}
