// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tabular source reading: workbook and CSV front-ends.
//!
//! Both readers produce the same shape - a header row plus string cells - so
//! the store's column mapping doesn't care where the bytes came from. All
//! failure modes collapse to `None`: a missing file, a corrupt workbook, a
//! malformed CSV record. The store turns `None` into an empty dataset; no
//! error crosses the store boundary.

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::{self, Cursor};
use std::path::Path;

/// A parsed tabular source: trimmed headers and string-coerced cells.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Headers the loader drops: blank names and the "Unnamed: N" placeholders
/// that spreadsheet exports leave behind for index columns.
pub fn is_placeholder_header(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed")
}

/// Read the first worksheet of an `.xlsx`/`.xls` workbook at `path`.
pub fn read_workbook(path: &Path) -> Option<Table> {
    let mut workbook = open_workbook_auto(path).ok()?;
    let range = workbook.worksheet_range_at(0)?.ok()?;
    range_to_table(&range)
}

/// Read the first worksheet of a workbook held in memory (upload path).
pub fn read_workbook_bytes(bytes: &[u8]) -> Option<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).ok()?;
    let range = workbook.worksheet_range_at(0)?.ok()?;
    range_to_table(&range)
}

/// Read CSV from any reader (file or in-memory bytes).
///
/// Ragged rows are tolerated; short rows fall back to empty strings during
/// column extraction. A record the parser cannot read at all fails the whole
/// table, matching the workbook path's all-or-nothing behavior.
pub fn read_csv<R: io::Read>(reader: R) -> Option<Table> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .ok()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.ok()?;
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }
    Some(Table { headers, rows })
}

fn range_to_table(range: &Range<Data>) -> Option<Table> {
    let mut row_iter = range.rows();
    let headers: Vec<String> = row_iter.next()?.iter().map(cell_to_string).collect();
    let rows: Vec<Vec<String>> = row_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Some(Table { headers, rows })
}

/// Coerce a workbook cell to trimmed text.
///
/// Error cells become empty rather than leaking "#DIV/0!" into record
/// fields. Numeric cells go through `Display`, which renders integral floats
/// without a trailing `.0` - UDISE codes stored as numbers survive intact.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
