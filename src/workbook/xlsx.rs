//! Load an Excel file (xlsx, xls, xlsb, ods) into the in-memory model.

use super::{Cell, Sheet, Workbook};
use crate::errors::{AppError, AppResult};
use calamine::{Data, Reader, Sheets, open_workbook_auto};
use std::path::Path;
use tracing::debug;

/// Read every sheet of the workbook at `path`.
///
/// The file handle is released before this returns; extraction works on
/// the returned snapshot only.
pub fn open_workbook(path: &Path) -> AppResult<Workbook> {
    if !path.exists() {
        return Err(AppError::SourceNotFound(path.to_path_buf()));
    }

    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| AppError::Workbook(format!("{}: {}", path.display(), e)))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in &sheet_names {
        let range = workbook.worksheet_range(sheet_name).map_err(|e| {
            AppError::Workbook(format!("Failed to read sheet '{}': {}", sheet_name, e))
        })?;

        // Range start offset (data may not begin at A1)
        let (start_row, start_col) = range.start().unwrap_or((0, 0));

        let mut sheet = Sheet::new(sheet_name.clone());
        sheet.rows = vec![Vec::new(); start_row as usize];

        for row in range.rows() {
            let mut cells = vec![Cell::Empty; start_col as usize];
            cells.extend(row.iter().map(convert));
            sheet.rows.push(cells);
        }

        debug!(sheet = %sheet_name, rows = sheet.rows.len(), "sheet loaded");
        sheets.push(sheet);
    }

    Ok(Workbook::new(sheets))
}

fn convert(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // 1900 date system assumed; serial keeps date and time of day
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
    }
}
