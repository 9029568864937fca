//! XLSX reader

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use fieldconfigs_core::{CellAddress, CellValue, SheetGrid};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode special characters in XML:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            result.push(c);
            continue;
        }

        let mut hex_chars = String::new();
        let mut consumed_x = false;
        let mut decoded = None;

        if chars.peek() == Some(&'x') {
            chars.next();
            consumed_x = true;

            while hex_chars.len() < 4 {
                match chars.peek() {
                    Some(&ch) if ch.is_ascii_hexdigit() => {
                        hex_chars.push(ch);
                        chars.next();
                    }
                    _ => break,
                }
            }

            if hex_chars.len() == 4 && chars.peek() == Some(&'_') {
                chars.next();
                decoded = u32::from_str_radix(&hex_chars, 16)
                    .ok()
                    .and_then(char::from_u32);
            }
        }

        match decoded {
            Some(ch) => result.push(ch),
            None => {
                // Not a valid escape sequence, output what we consumed
                result.push('_');
                if consumed_x {
                    result.push('x');
                }
                result.push_str(&hex_chars);
            }
        }
    }

    result
}

/// Which worksheet to read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelector {
    /// The first sheet in workbook order
    #[default]
    First,
    /// A sheet by 0-based position in workbook order
    Index(usize),
    /// A sheet by its tab name
    Name(String),
}

/// Options for reading a worksheet
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Worksheet to read
    pub sheet: SheetSelector,
    /// Stop before this many sheet rows (header included); `None` reads all
    pub max_rows: Option<u32>,
}

/// A worksheet listed in `xl/workbook.xml` with its resolved part path
#[derive(Debug, Clone)]
struct SheetEntry {
    name: String,
    path: String,
}

/// A `<c>` element being assembled from XML events
#[derive(Debug)]
struct PendingCell {
    addr: CellAddress,
    cell_type: Option<String>,
    value: String,
    has_value: bool,
}

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read one worksheet from a file path
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> XlsxResult<SheetGrid> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file), options)
    }

    /// Read one worksheet from a reader
    pub fn read<R: Read + Seek>(reader: R, options: &ReadOptions) -> XlsxResult<SheetGrid> {
        let mut archive = Self::open_archive(reader)?;

        let sheets = Self::list_sheets(&mut archive)?;
        let entry = Self::select_sheet(&sheets, &options.sheet)?;

        let shared_strings = Self::read_shared_strings(&mut archive)?;

        tracing::debug!(
            sheet = %entry.name,
            part = %entry.path,
            shared_strings = shared_strings.len(),
            "reading worksheet"
        );

        Self::read_worksheet(&mut archive, &entry.path, &shared_strings, options.max_rows)
    }

    /// List worksheet names from a file path, in workbook order
    pub fn sheet_names_file<P: AsRef<Path>>(path: P) -> XlsxResult<Vec<String>> {
        let file = File::open(path)?;
        Self::sheet_names(BufReader::new(file))
    }

    /// List worksheet names, in workbook order
    pub fn sheet_names<R: Read + Seek>(reader: R) -> XlsxResult<Vec<String>> {
        let mut archive = Self::open_archive(reader)?;
        let sheets = Self::list_sheets(&mut archive)?;
        Ok(sheets.into_iter().map(|s| s.name).collect())
    }

    fn open_archive<R: Read + Seek>(reader: R) -> XlsxResult<zip::ZipArchive<R>> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        Ok(archive)
    }

    fn select_sheet<'a>(
        sheets: &'a [SheetEntry],
        selector: &SheetSelector,
    ) -> XlsxResult<&'a SheetEntry> {
        match selector {
            SheetSelector::First => sheets
                .first()
                .ok_or_else(|| XlsxError::SheetNotFound("workbook has no worksheets".into())),
            SheetSelector::Index(idx) => sheets
                .get(*idx)
                .ok_or_else(|| XlsxError::SheetNotFound(format!("index {}", idx))),
            SheetSelector::Name(name) => sheets
                .iter()
                .find(|s| &s.name == name)
                .ok_or_else(|| XlsxError::SheetNotFound(name.clone())),
        }
    }

    /// Worksheets in workbook order, joined with their relationship targets
    fn list_sheets<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<SheetEntry>> {
        let sheet_info = Self::read_workbook_xml(archive)?;
        let sheet_paths = Self::read_workbook_rels(archive)?;

        Ok(sheet_info
            .into_iter()
            .filter_map(|(name, r_id)| {
                sheet_paths.get(&r_id).map(|path| SheetEntry {
                    name,
                    path: path.clone(),
                })
            })
            .collect())
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        // Whitespace inside <t> is significant, so text is not trimmed.
        let mut xml_reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();
        let mut current = String::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Event::Empty(e) if e.local_name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current));
                        current.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Event::Text(e) if in_t => {
                    current.push_str(&e.unescape()?);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read workbook.xml to get sheet names and rIds
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sheet" => {
                    let mut name = None;
                    let mut r_id = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.local_name().as_ref() {
                            b"name" => name = Some(attr.unescape_value()?.into_owned()),
                            // r:id, whatever the relationships prefix is called
                            b"id" if attr.key.prefix().is_some() => {
                                r_id = Some(attr.unescape_value()?.into_owned());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get sheet file paths
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e)
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => id = Some(attr.unescape_value()?.into_owned()),
                            b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                            b"Type" => rel_type = Some(attr.unescape_value()?.into_owned()),
                            _ => {}
                        }
                    }

                    // Only include worksheet relationships
                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            rels.insert(id, Self::resolve_target(&target));
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Targets are relative to `xl/` unless they start with `/`
    fn resolve_target(target: &str) -> String {
        match target.strip_prefix('/') {
            Some(absolute) => absolute.to_string(),
            None => format!("xl/{}", target),
        }
    }

    /// Read a worksheet's cells into a grid
    ///
    /// Rows are stored in ascending order, so parsing stops at the first row
    /// at or beyond `max_rows`.
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        shared_strings: &[String],
        max_rows: Option<u32>,
    ) -> XlsxResult<SheetGrid> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();
        let mut grid = SheetGrid::new();

        let mut current_row: u32 = 0;
        let mut next_row: u32 = 0;
        let mut next_col: u16 = 0;
        let mut cell: Option<PendingCell> = None;
        let mut in_value = false;
        let mut in_inline_str = false;
        let mut in_inline_text = false;
        let mut in_phonetic = false;

        let past_limit = |row: u32| max_rows.map_or(false, |max| row >= max);

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"row" => {
                        current_row = Self::row_index(&e, next_row)?;
                        if past_limit(current_row) {
                            break;
                        }
                        next_row = current_row + 1;
                        next_col = 0;
                    }
                    b"c" => {
                        let pending = Self::start_cell(&e, current_row, next_col)?;
                        next_col = pending.addr.col.saturating_add(1);
                        cell = Some(pending);
                    }
                    b"v" if cell.is_some() => in_value = true,
                    b"is" if cell.is_some() => in_inline_str = true,
                    b"rPh" => in_phonetic = true,
                    b"t" if in_inline_str && !in_phonetic => in_inline_text = true,
                    _ => {}
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"row" => {
                        let row = Self::row_index(&e, next_row)?;
                        if past_limit(row) {
                            break;
                        }
                        next_row = row + 1;
                    }
                    b"c" => {
                        // Style-only cell: no value, but it still occupies a column
                        let pending = Self::start_cell(&e, current_row, next_col)?;
                        next_col = pending.addr.col.saturating_add(1);
                    }
                    _ => {}
                },
                Event::Text(e) if in_value || in_inline_text => {
                    if let Some(pending) = cell.as_mut() {
                        pending.value.push_str(&e.unescape()?);
                        pending.has_value = true;
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"c" => {
                        if let Some(pending) = cell.take() {
                            if let Some(value) = Self::cell_value(&pending, shared_strings)? {
                                grid.set_at(pending.addr, value);
                            }
                        }
                        in_value = false;
                        in_inline_str = false;
                        in_inline_text = false;
                    }
                    b"v" => in_value = false,
                    b"is" => in_inline_str = false,
                    b"rPh" => in_phonetic = false,
                    b"t" => in_inline_text = false,
                    b"sheetData" => break,
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        tracing::debug!(rows = grid.row_count(), columns = grid.width(), "worksheet loaded");

        Ok(grid)
    }

    /// 0-based row index from a `<row r="...">` element, or the running
    /// position when the attribute is absent
    fn row_index(e: &BytesStart<'_>, fallback: u32) -> XlsxResult<u32> {
        for attr in e.attributes().flatten() {
            if attr.key.as_ref() == b"r" {
                let value = attr.unescape_value()?;
                let r: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| XlsxError::Parse(format!("Invalid row number '{}'", value)))?;
                return Ok(r.saturating_sub(1));
            }
        }
        Ok(fallback)
    }

    fn start_cell(e: &BytesStart<'_>, row: u32, col: u16) -> XlsxResult<PendingCell> {
        let mut addr = CellAddress::new(row, col);
        let mut cell_type = None;

        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"r" => {
                    let cell_ref = attr.unescape_value()?;
                    addr = CellAddress::parse(&cell_ref).map_err(|err| {
                        XlsxError::Parse(format!("Invalid cell reference '{}': {}", cell_ref, err))
                    })?;
                }
                b"t" => cell_type = Some(attr.unescape_value()?.into_owned()),
                _ => {}
            }
        }

        Ok(PendingCell {
            addr,
            cell_type,
            value: String::new(),
            has_value: false,
        })
    }

    /// Convert a finished cell into a value; formula cells contribute their
    /// cached result only
    fn cell_value(cell: &PendingCell, shared_strings: &[String]) -> XlsxResult<Option<CellValue>> {
        if !cell.has_value {
            return Ok(None);
        }

        let value = cell.value.as_str();
        let parsed = match cell.cell_type.as_deref() {
            // Shared string
            Some("s") => {
                let idx: usize = value.trim().parse().map_err(|_| {
                    XlsxError::Parse(format!("Invalid shared string index: {}", value))
                })?;
                let s = shared_strings.get(idx).ok_or_else(|| {
                    XlsxError::Parse(format!("Shared string index {} out of bounds", idx))
                })?;
                CellValue::Text(s.clone())
            }

            // Boolean
            Some("b") => {
                let v = value.trim();
                CellValue::Boolean(v == "1" || v.eq_ignore_ascii_case("true"))
            }

            // Error literal stays as text (#N/A, #DIV/0!, ...)
            Some("e") => CellValue::text(value),

            // Inline or formula string - decode Excel escape sequences
            Some("inlineStr") | Some("str") => CellValue::Text(decode_excel_escapes(value)),

            // Number (default type or explicit "n"); NaN and inf stay text
            None | Some("n") => match value.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => CellValue::Number(n),
                _ => CellValue::text(value),
            },

            // ISO dates and unknown types - keep the raw text
            Some(_) => CellValue::text(value),
        };

        Ok(Some(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};

    const CONTENT_TYPES: &str = r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;

    /// Build a package with the given `(name, sheet xml)` worksheets
    fn package(sheets: &[(&str, &str)], shared_strings: Option<&str>) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();

            let mut workbook = String::from(
                r#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
            );
            let mut rels = String::from(
                r#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            );
            for (i, (name, _)) in sheets.iter().enumerate() {
                workbook.push_str(&format!(
                    r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                    name,
                    i + 1,
                    i + 1
                ));
                rels.push_str(&format!(
                    r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                    i + 1,
                    i + 1
                ));
            }
            workbook.push_str("</sheets></workbook>");
            rels.push_str("</Relationships>");

            zip.start_file("xl/workbook.xml", options).unwrap();
            zip.write_all(workbook.as_bytes()).unwrap();
            zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
            zip.write_all(rels.as_bytes()).unwrap();

            for (i, (_, xml)) in sheets.iter().enumerate() {
                zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
                    .unwrap();
                zip.write_all(xml.as_bytes()).unwrap();
            }

            if let Some(sst) = shared_strings {
                zip.start_file("xl/sharedStrings.xml", options).unwrap();
                zip.write_all(sst.as_bytes()).unwrap();
            }

            zip.finish().unwrap();
        }
        buf
    }

    fn sheet(rows: &str) -> String {
        format!(
            r#"<?xml version="1.0"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
            rows
        )
    }

    fn read(bytes: Vec<u8>, options: &ReadOptions) -> XlsxResult<SheetGrid> {
        XlsxReader::read(Cursor::new(bytes), options)
    }

    #[test]
    fn test_decode_excel_escapes() {
        assert_eq!(decode_excel_escapes("hello_x000d_world"), "hello\rworld");
        assert_eq!(decode_excel_escapes("col1_x0009_col2"), "col1\tcol2");
        assert_eq!(decode_excel_escapes("under_x005f_score"), "under_score");
        assert_eq!(decode_excel_escapes("_x000A_"), "\n");
        assert_eq!(decode_excel_escapes("plain text"), "plain text");
    }

    #[test]
    fn test_decode_excel_escapes_partial_sequence() {
        assert_eq!(decode_excel_escapes("_x00"), "_x00");
        assert_eq!(decode_excel_escapes("_x000d"), "_x000d");
        assert_eq!(decode_excel_escapes("snake_case"), "snake_case");
        assert_eq!(decode_excel_escapes("trailing_"), "trailing_");
    }

    #[test]
    fn test_read_empty_sheet() {
        let bytes = package(&[("Sheet1", &sheet(""))], None);
        let grid = read(bytes, &ReadOptions::default()).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_read_value_types() {
        let rows = r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Name</t></is></c><c r="B1" t="s"><v>0</v></c><c r="C1" t="b"><v>1</v></c><c r="D1"><v>2.5</v></c><c r="E1" t="e"><v>#N/A</v></c><c r="F1" t="str"><f>A1&amp;"x"</f><v>Namex</v></c></row>"#;
        let sst = r#"<?xml version="1.0"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><si><t xml:space="preserve"> Depth </t></si></sst>"#;
        let bytes = package(&[("Sheet1", &sheet(rows))], Some(sst));

        let grid = read(bytes, &ReadOptions::default()).unwrap();
        assert_eq!(
            grid.row(0).unwrap(),
            [
                CellValue::text("Name"),
                CellValue::text(" Depth "),
                CellValue::Boolean(true),
                CellValue::Number(2.5),
                CellValue::text("#N/A"),
                CellValue::text("Namex"),
            ]
        );
    }

    #[test]
    fn test_non_finite_numbers_stay_text() {
        let rows = r#"<row r="1"><c r="A1"><v>NaN</v></c><c r="B1" t="n"><v>inf</v></c><c r="C1"><v>-infinity</v></c><c r="D1"><v>994.1414234139935</v></c></row>"#;
        let bytes = package(&[("Sheet1", &sheet(rows))], None);

        let grid = read(bytes, &ReadOptions::default()).unwrap();
        assert_eq!(
            grid.row(0).unwrap(),
            [
                CellValue::text("NaN"),
                CellValue::text("inf"),
                CellValue::text("-infinity"),
                CellValue::Number(994.1414234139935),
            ]
        );
    }

    #[test]
    fn test_rich_text_skips_phonetic_runs() {
        let sst = r#"<sst><si><r><t>Field</t></r><r><t>Config</t></r><rPh sb="0" eb="1"><t>ignored</t></rPh></si><si/></sst>"#;
        let rows = r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row>"#;
        let bytes = package(&[("Sheet1", &sheet(rows))], Some(sst));

        let grid = read(bytes, &ReadOptions::default()).unwrap();
        assert_eq!(grid.get(0, 0), &CellValue::text("FieldConfig"));
        assert_eq!(grid.get(0, 1), &CellValue::text(""));
    }

    #[test]
    fn test_cells_without_references() {
        let rows = r#"<row><c><v>1</v></c><c/><c><v>3</v></c></row><row><c><v>4</v></c></row>"#;
        let bytes = package(&[("Sheet1", &sheet(rows))], None);

        let grid = read(bytes, &ReadOptions::default()).unwrap();
        assert_eq!(
            grid.row(0).unwrap(),
            [CellValue::Number(1.0), CellValue::Empty, CellValue::Number(3.0)]
        );
        assert_eq!(grid.get(1, 0), &CellValue::Number(4.0));
    }

    #[test]
    fn test_max_rows_stops_parsing() {
        let mut rows = String::new();
        for r in 1..=10 {
            rows.push_str(&format!(r#"<row r="{0}"><c r="A{0}"><v>{0}</v></c></row>"#, r));
        }
        let bytes = package(&[("Sheet1", &sheet(&rows))], None);

        let options = ReadOptions {
            max_rows: Some(4),
            ..Default::default()
        };
        let grid = read(bytes, &options).unwrap();
        assert_eq!(grid.row_count(), 4);
        assert_eq!(grid.get(3, 0), &CellValue::Number(4.0));
    }

    #[test]
    fn test_sparse_rows_keep_positions() {
        let rows = r#"<row r="2"><c r="C2"><v>7</v></c></row><row r="5"><c r="A5" t="inlineStr"><is><t>x</t></is></c></row>"#;
        let bytes = package(&[("Sheet1", &sheet(rows))], None);

        let grid = read(bytes, &ReadOptions::default()).unwrap();
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.get(1, 2), &CellValue::Number(7.0));
        assert_eq!(grid.get(4, 0), &CellValue::text("x"));
        assert!(grid.is_row_empty(0));
    }

    #[test]
    fn test_select_sheet_by_name_and_index() {
        let first = sheet(r#"<row r="1"><c r="A1"><v>1</v></c></row>"#);
        let second = sheet(r#"<row r="1"><c r="A1"><v>2</v></c></row>"#);
        let bytes = package(&[("Front", &first), ("Configs", &second)], None);

        let by_name = ReadOptions {
            sheet: SheetSelector::Name("Configs".into()),
            ..Default::default()
        };
        let grid = read(bytes.clone(), &by_name).unwrap();
        assert_eq!(grid.get(0, 0), &CellValue::Number(2.0));

        let by_index = ReadOptions {
            sheet: SheetSelector::Index(0),
            ..Default::default()
        };
        let grid = read(bytes.clone(), &by_index).unwrap();
        assert_eq!(grid.get(0, 0), &CellValue::Number(1.0));

        let missing = ReadOptions {
            sheet: SheetSelector::Name("Nope".into()),
            ..Default::default()
        };
        assert!(matches!(read(bytes.clone(), &missing), Err(XlsxError::SheetNotFound(_))));

        assert_eq!(
            XlsxReader::sheet_names(Cursor::new(bytes)).unwrap(),
            ["Front", "Configs"]
        );
    }

    #[test]
    fn test_missing_content_types_is_invalid() {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            zip.start_file("hello.txt", zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"hi").unwrap();
            zip.finish().unwrap();
        }
        assert!(matches!(
            read(buf, &ReadOptions::default()),
            Err(XlsxError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_not_a_zip() {
        let result = read(b"Name,Depth\nA,10\n".to_vec(), &ReadOptions::default());
        assert!(matches!(result, Err(XlsxError::Zip(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = XlsxReader::read_file("/definitely/not/here.xlsx", &ReadOptions::default())
            .unwrap_err();
        match err {
            XlsxError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }
}
