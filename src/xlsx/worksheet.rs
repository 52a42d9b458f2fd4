//! Worksheet grid decoding.

use crate::container::decode_xml_bytes;
use crate::error::Result;
use crate::model::{Row, Table};
use quick_xml::events::{BytesStart, Event};

use super::cell::{CellKind, RawCell};
use super::shared_strings::SharedStrings;
use super::xml::{self, Nesting};

/// Which text node is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Value,
    Inline,
}

/// Decode a worksheet part into a table.
///
/// Rows and cells are emitted in document order. The `r` cell reference is
/// not consulted, so sparse or out-of-order references never pad or reorder a
/// row. A document without `<sheetData>` decodes to an empty table.
///
/// Fails with [`crate::Error::XmlParse`] if the part is not well-formed XML.
pub fn decode_worksheet(bytes: &[u8], shared: &SharedStrings) -> Result<Table> {
    let xml = decode_xml_bytes(bytes)?;
    let table = parse_sheet(&xml, shared)?;
    log::debug!(
        "decoded worksheet: {} rows, {} cells",
        table.row_count(),
        table.cell_count()
    );
    Ok(table)
}

fn parse_sheet(xml: &str, shared: &SharedStrings) -> Result<Table> {
    let mut table = Table::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut nesting = Nesting::default();

    let mut in_sheet_data = false;
    let mut current_row: Option<Row> = None;
    let mut current_cell: Option<RawCell> = None;
    let mut in_inline = false;
    let mut in_phonetic = false;
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                nesting.open();
                match e.local_name().as_ref() {
                    b"sheetData" => in_sheet_data = true,
                    b"row" if in_sheet_data => current_row = Some(Row::default()),
                    b"c" if current_row.is_some() => current_cell = Some(start_cell(e)?),
                    b"v" => {
                        if let Some(cell) = current_cell.as_mut() {
                            cell.value = Some(String::new());
                            capture = Some(Capture::Value);
                        }
                    }
                    b"is" => {
                        if let Some(cell) = current_cell.as_mut() {
                            cell.inline.get_or_insert_with(String::new);
                            in_inline = true;
                        }
                    }
                    b"rPh" if in_inline => in_phonetic = true,
                    b"t" if in_inline && !in_phonetic => capture = Some(Capture::Inline),
                    _ => {}
                }
            }
            Event::Empty(ref e) => {
                nesting.empty();
                match e.local_name().as_ref() {
                    b"row" if in_sheet_data => table.push_row(Row::default()),
                    b"c" => {
                        if let Some(row) = current_row.as_mut() {
                            row.push(start_cell(e)?.resolve(shared));
                        }
                    }
                    b"v" => {
                        if let Some(cell) = current_cell.as_mut() {
                            cell.value = Some(String::new());
                        }
                    }
                    b"is" => {
                        if let Some(cell) = current_cell.as_mut() {
                            cell.inline.get_or_insert_with(String::new);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                if capture.is_some() {
                    let text = xml::text(e)?;
                    push_capture(current_cell.as_mut(), capture, &text);
                }
            }
            Event::CData(ref e) => {
                if capture.is_some() {
                    push_capture(current_cell.as_mut(), capture, &xml::cdata(e));
                }
            }
            Event::End(ref e) => {
                nesting.close();
                match e.local_name().as_ref() {
                    b"sheetData" => in_sheet_data = false,
                    b"row" => {
                        if let Some(row) = current_row.take() {
                            table.push_row(row);
                        }
                    }
                    b"c" => {
                        if let (Some(cell), Some(row)) = (current_cell.take(), current_row.as_mut())
                        {
                            row.push(cell.resolve(shared));
                        }
                        in_inline = false;
                        in_phonetic = false;
                        capture = None;
                    }
                    b"v" | b"t" => capture = None,
                    b"is" => in_inline = false,
                    b"rPh" => in_phonetic = false,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    nesting.finish("worksheet")?;
    Ok(table)
}

fn start_cell(e: &BytesStart<'_>) -> Result<RawCell> {
    let t = xml::attribute(e, b"t")?;
    Ok(RawCell::new(CellKind::from_type_attr(t.as_deref())))
}

fn push_capture(cell: Option<&mut RawCell>, capture: Option<Capture>, text: &str) {
    let Some(cell) = cell else {
        return;
    };
    let target = match capture {
        Some(Capture::Value) => cell.value.as_mut(),
        Some(Capture::Inline) => cell.inline.as_mut(),
        None => None,
    };
    if let Some(target) = target {
        target.push_str(text);
    }
}
