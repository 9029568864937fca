//! XLSX writer
//!
//! Writes a single worksheet with text in the shared strings table. No styles
//! are emitted; readers fall back to the default cell format.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::XlsxResult;
use fieldconfigs_core::{CellAddress, CellValue, SheetGrid};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a grid as a one-sheet workbook to a file path
    pub fn write_file<P: AsRef<Path>>(
        grid: &SheetGrid,
        sheet_name: &str,
        path: P,
    ) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(grid, sheet_name, file)
    }

    /// Write a grid as a one-sheet workbook to a writer
    pub fn write<W: Write + Seek>(grid: &SheetGrid, sheet_name: &str, writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        let mut shared = SharedStrings::default();
        let sheet_xml = Self::worksheet_xml(grid, &mut shared);

        Self::write_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES)?;
        Self::write_part(&mut zip, "_rels/.rels", ROOT_RELS)?;
        Self::write_part(&mut zip, "xl/workbook.xml", &Self::workbook_xml(sheet_name))?;
        Self::write_part(&mut zip, "xl/_rels/workbook.xml.rels", WORKBOOK_RELS)?;
        Self::write_part(&mut zip, "xl/worksheets/sheet1.xml", &sheet_xml)?;
        Self::write_part(&mut zip, "xl/sharedStrings.xml", &shared.to_xml())?;

        zip.finish()?;
        Ok(())
    }

    fn write_part<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        name: &str,
        content: &str,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn workbook_xml(sheet_name: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>
        <sheet name="{}" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#,
            escape_xml(sheet_name)
        )
    }

    fn worksheet_xml(grid: &SheetGrid, shared: &mut SharedStrings) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <sheetData>"#,
        );

        for (row, cells) in grid.rows().enumerate() {
            if cells.iter().all(|c| matches!(c, CellValue::Empty)) {
                continue;
            }

            content.push_str(&format!("\n        <row r=\"{}\">", row + 1));

            for (col, value) in cells.iter().enumerate() {
                let cell_ref = CellAddress::new(row as u32, col as u16).to_a1_string();
                match value {
                    CellValue::Empty => {}
                    CellValue::Text(s) => {
                        content.push_str(&format!(
                            "\n            <c r=\"{}\" t=\"s\"><v>{}</v></c>",
                            cell_ref,
                            shared.index_of(s)
                        ));
                    }
                    CellValue::Number(n) => {
                        content.push_str(&format!(
                            "\n            <c r=\"{}\"><v>{}</v></c>",
                            cell_ref, n
                        ));
                    }
                    CellValue::Boolean(b) => {
                        content.push_str(&format!(
                            "\n            <c r=\"{}\" t=\"b\"><v>{}</v></c>",
                            cell_ref,
                            if *b { 1 } else { 0 }
                        ));
                    }
                }
            }

            content.push_str("\n        </row>");
        }

        content.push_str("\n    </sheetData>\n</worksheet>");
        content
    }
}

/// Shared string table built while writing cells
#[derive(Debug, Default)]
struct SharedStrings {
    strings: Vec<String>,
    index: HashMap<String, usize>,
    references: usize,
}

impl SharedStrings {
    fn index_of(&mut self, s: &str) -> usize {
        self.references += 1;
        if let Some(&idx) = self.index.get(s) {
            return idx;
        }
        let idx = self.strings.len();
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), idx);
        idx
    }

    fn to_xml(&self) -> String {
        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
            self.references,
            self.strings.len()
        );
        for s in &self.strings {
            content.push_str(&format!(
                "<si><t xml:space=\"preserve\">{}</t></si>",
                escape_xml(s)
            ));
        }
        content.push_str("</sst>");
        content
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
    <Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>
</Relationships>"#;
