//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use fieldconfigs_core::TransposedTable;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a transposed table to a CSV file, replacing any existing file
    pub fn write_file<P: AsRef<Path>>(
        table: &TransposedTable,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(table, file, options)
    }

    /// Write a transposed table to a writer
    ///
    /// The header row is the corner label followed by every configuration
    /// name; each following row is an original column label followed by its
    /// values.
    pub fn write<W: Write>(
        table: &TransposedTable,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if options.write_header {
            let mut header = Vec::with_capacity(table.headers().len() + 1);
            header.push(table.corner().to_string());
            header.extend(table.headers().iter().cloned());
            csv_writer.write_record(&header)?;
        }

        for row in table.rows() {
            let mut record = Vec::with_capacity(row.values().len() + 1);
            record.push(row.label().to_string());
            record.extend(row.values().iter().map(|v| v.to_string()));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render a transposed table to a string
    pub fn write_to_string(
        table: &TransposedTable,
        options: &CsvWriteOptions,
    ) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(table, &mut buf, options)?;
        // csv only ever writes the UTF-8 text it was given
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldconfigs_core::{CellValue, TransposedRow};
    use pretty_assertions::assert_eq;

    fn depth_table() -> TransposedTable {
        TransposedTable::new(
            "Name",
            vec!["A".into(), "B".into()],
            vec![TransposedRow::new(
                "Depth",
                vec![CellValue::Number(10.0), CellValue::Empty],
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_blank_cells_written_as_empty_fields() {
        let csv = CsvWriter::write_to_string(&depth_table(), &CsvWriteOptions::default()).unwrap();
        assert_eq!(csv, "Name,A,B\nDepth,10,\n");
    }

    #[test]
    fn test_fields_quoted_when_needed() {
        let table = TransposedTable::new(
            "Name",
            vec!["Lincoln, NZ".into()],
            vec![
                TransposedRow::new("Notes", vec![CellValue::text("say \"hi\"")]),
                TransposedRow::new("Irrigated", vec![CellValue::Boolean(false)]),
            ],
        )
        .unwrap();

        let csv = CsvWriter::write_to_string(&table, &CsvWriteOptions::default()).unwrap();
        assert_eq!(
            csv,
            "Name,\"Lincoln, NZ\"\nNotes,\"say \"\"hi\"\"\"\nIrrigated,False\n"
        );
    }

    #[test]
    fn test_options_without_header_and_crlf() {
        let options = CsvWriteOptions {
            delimiter: b';',
            write_header: false,
            line_terminator: LineTerminator::CRLF,
            ..Default::default()
        };
        let csv = CsvWriter::write_to_string(&depth_table(), &options).unwrap();
        assert_eq!(csv, "Depth;10;\r\n");
    }
}
