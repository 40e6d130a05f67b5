//! Spreadsheet reading on calamine

use crate::format::RawValue;
use crate::{BatchError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Parsed contents of the first worksheet of a spreadsheet
pub struct SheetData {
    headers: Vec<String>,
    rows: Vec<Vec<RawValue>>,
}

impl SheetData {
    /// Read a `.xlsx`/`.xls` file, treating row `header_row` (0-indexed) as
    /// the header row. Everything below it becomes data rows.
    pub fn read(path: &Path, header_row: usize) -> Result<Self> {
        let range = open_first_sheet(path)?;

        let mut all_rows = range.rows();
        let headers = all_rows
            .nth(header_row)
            .ok_or_else(|| {
                BatchError::SpreadsheetRead(format!(
                    "A linha {} não existe na planilha",
                    header_row + 1
                ))
            })?
            .iter()
            .map(|cell| convert_cell(cell).to_display_string())
            .collect();

        let rows = all_rows
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<RawValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column position for a header string, if present
    pub fn column_position(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Look up a cell by header string, falling back to a positional index
    /// when the header is not present.
    pub fn value(&self, row: &[RawValue], header: &str, fallback_index: usize) -> RawValue {
        let position = self.column_position(header).unwrap_or(fallback_index);
        row.get(position).cloned().unwrap_or(RawValue::Empty)
    }
}

/// Read only the header row, for the profile editor. Blank header cells are
/// named `"Coluna N"` (1-based) so every column stays addressable.
pub fn read_headers(path: &Path, header_row: usize) -> Result<Vec<String>> {
    let range = open_first_sheet(path)?;

    let row = range.rows().nth(header_row).ok_or_else(|| {
        BatchError::SpreadsheetRead(format!(
            "A linha {} não existe na planilha",
            header_row + 1
        ))
    })?;

    Ok(row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let text = convert_cell(cell).to_display_string();
            if text.is_empty() {
                format!("Coluna {}", i + 1)
            } else {
                text
            }
        })
        .collect())
}

fn open_first_sheet(path: &Path) -> Result<Range<Data>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| BatchError::SpreadsheetRead(e.to_string()))?;

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| BatchError::SpreadsheetRead("A planilha está vazia".to_string()))?
        .map_err(|e| BatchError::SpreadsheetRead(e.to_string()))
}

fn convert_cell(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::Text(s.clone()),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => RawValue::DateTime(naive),
            None => RawValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawValue::Text(s.clone()),
        Data::Error(_) => RawValue::Empty,
    }
}
