//! Shared fixtures for the cleaner-lib integration tests.

use std::path::Path;

use cleaner_lib::workbook::{CellValue, Sheet, write_rows_as_workbook};

#[allow(dead_code)]
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

#[allow(dead_code)]
pub fn sheet_from(rows: Vec<Vec<CellValue>>) -> Sheet {
    Sheet::new("Sheet1", rows)
}

/// Write rows as an on-disk xlsx fixture the pipeline can load back.
#[allow(dead_code)]
pub fn write_fixture_workbook(path: &Path, rows: &[Vec<CellValue>]) {
    write_rows_as_workbook("Sheet1", rows, path).expect("fixture workbook should write");
}
