//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use fieldconfigs_core::{CellValue, TransposedRow, TransposedTable};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file written by [`CsvWriter`](crate::CsvWriter)
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        options: &CsvReadOptions,
    ) -> CsvResult<TransposedTable> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read a transposed table: the first record is the header, the first
    /// field of every record is its label
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<TransposedTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();

        let header = match records.next() {
            Some(record) => record?,
            None => {
                return Err(CsvError::Parse {
                    row: 1,
                    column: 1,
                    message: "missing header row".into(),
                })
            }
        };

        let mut fields = header.iter();
        let corner = fields.next().unwrap_or_default().to_string();
        let headers: Vec<String> = fields.map(str::to_string).collect();

        let mut rows = Vec::new();
        for (idx, result) in records.enumerate() {
            let record = result?;
            let row_number = idx + 2;

            if record.len() != headers.len() + 1 {
                return Err(CsvError::Parse {
                    row: row_number,
                    column: record.len(),
                    message: format!(
                        "expected {} fields, found {}",
                        headers.len() + 1,
                        record.len()
                    ),
                });
            }

            let mut fields = record.iter();
            let label = fields.next().unwrap_or_default();
            let values = fields
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::text(field)
                    }
                })
                .collect();

            rows.push(TransposedRow::new(label, values));
        }

        Ok(TransposedTable::new(corner, headers, rows)?)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        if field.is_empty() {
            return CellValue::Empty;
        }

        match field {
            "True" => return CellValue::Boolean(true),
            "False" => return CellValue::Boolean(false),
            _ => {}
        }

        match field.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::text(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_text_values() {
        let table = CsvReader::read(
            "Name,A,B\nDepth,10,\nCrop,Wheat,\"Maize, late\"\n".as_bytes(),
            &CsvReadOptions::default(),
        )
        .unwrap();

        assert_eq!(table.corner(), "Name");
        assert_eq!(table.headers(), ["A", "B"]);
        assert_eq!(table.value("Depth", "A"), Some(&CellValue::text("10")));
        assert_eq!(table.value("Depth", "B"), Some(&CellValue::Empty));
        assert_eq!(table.value("Crop", "B"), Some(&CellValue::text("Maize, late")));
    }

    #[test]
    fn test_detect_types() {
        let options = CsvReadOptions {
            auto_detect_types: true,
            ..Default::default()
        };
        let input = "Name,A,B,C\nMixed,2.5,True,inf\n";
        let table = CsvReader::read(input.as_bytes(), &options).unwrap();

        assert_eq!(
            table.row("Mixed").unwrap().values(),
            [
                CellValue::Number(2.5),
                CellValue::Boolean(true),
                CellValue::text("inf"),
            ]
        );
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = CsvReader::read("Name,A,B\nDepth,10\n".as_bytes(), &CsvReadOptions::default())
            .unwrap_err();
        assert!(matches!(err, CsvError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = CsvReader::read("".as_bytes(), &CsvReadOptions::default()).unwrap_err();
        assert!(matches!(err, CsvError::Parse { row: 1, .. }));
    }
}
