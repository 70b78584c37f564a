use anyhow::{Context, Result};

use crate::domain::entities::sheet::RawRow;

/// Reads every record of a sheet export, header row included.
///
/// Quoted fields keep embedded commas and doubled quotes. Records may have
/// different lengths; short rows read as empty cells downstream.
pub fn read_csv_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(rows.len() + 1);
        rows.push(RawRow::new(
            line,
            record.iter().map(|value| value.to_string()).collect(),
        ));
    }

    Ok(rows)
}
