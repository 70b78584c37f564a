use std::io::Cursor;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx};
use chrono::{Days, NaiveDate};

use crate::domain::entities::sheet::RawRow;
use crate::usecase::ports::sheet_source::WorkbookTabs;

/// Excel serial day 0; serial 1 is 1900-01-01 once the 1900 leap-year bug is absorbed.
fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

fn excel_serial_to_date(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    excel_epoch()
        .and_then(|epoch| epoch.checked_add_days(Days::new(serial.floor() as u64)))
        .map(|date| date.format("%Y-%m-%d").to_string())
}

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => excel_serial_to_date(v.as_f64()).unwrap_or_else(|| v.to_string()),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// 1-based sheet row for the `idx`-th row of a used range starting at `range_start`.
pub fn sheet_row_number(range_start: Option<(u32, u32)>, idx: usize) -> usize {
    let first_row = range_start.map(|(row, _)| row as usize).unwrap_or(0);
    first_row + idx + 1
}

/// Reads every worksheet of an `.xlsx` download into rows, header rows included.
pub fn read_workbook_tabs(bytes: Vec<u8>) -> Result<WorkbookTabs> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).context("failed to open xlsx workbook")?;

    let mut tabs = WorkbookTabs::new();
    for (name, range) in workbook.worksheets() {
        let start = range.start();
        let rows = range
            .rows()
            .enumerate()
            .map(|(idx, row)| {
                RawRow::new(
                    sheet_row_number(start, idx),
                    row.iter().map(cell_to_string).collect(),
                )
            })
            .collect();
        tabs.insert(name, rows);
    }

    Ok(tabs)
}
