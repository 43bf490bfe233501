//! Row quarantine: scan for flagged rows, copy them to a side workbook,
//! then delete them from the source in descending index order.

use std::path::Path;

use log::info;

use crate::doctype::BVN_COLUMN;
use crate::error::PipelineError;
use crate::workbook::{self, CellValue, Sheet};

/// Worksheet title of the blank-row quarantine document.
pub const BLANK_ROWS_TITLE: &str = "Blank Rows";
/// Worksheet title of the invalid-BVN quarantine document.
pub const INVALID_BVN_TITLE: &str = "Non-BVN Start With 2";

/// Filename suffix for blank-row quarantine documents.
pub const BLANK_ROWS_SUFFIX: &str = "_BlankRows";
/// Filename suffix for invalid-BVN quarantine documents.
pub const INVALID_BVN_SUFFIX: &str = "_InvalidBVN";

/// Snapshot of the rows a scan flagged: full value tuples plus their row
/// indices at scan time, both in ascending row order. The copy into the
/// quarantine document uses this snapshot, never the mutated sheet.
#[derive(Debug, Default)]
pub struct FlaggedRows {
    pub rows: Vec<Vec<CellValue>>,
    pub indices: Vec<usize>,
}

impl FlaggedRows {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    fn push(&mut self, row_idx: usize, row: &[CellValue]) {
        self.rows.push(row.to_vec());
        self.indices.push(row_idx);
    }
}

/// A data row is blank when any of the given columns holds `Empty` or an
/// empty string. Columns past the end of a short row count as blank.
pub fn find_blank_rows(sheet: &Sheet, columns: &[usize]) -> FlaggedRows {
    let mut flagged = FlaggedRows::default();
    for (row_idx, row) in sheet.data_rows() {
        let blank = columns
            .iter()
            .any(|&col| row.get(col).is_none_or(CellValue::is_blank));
        if blank {
            flagged.push(row_idx, row);
        }
    }
    flagged
}

/// A data row is invalid when the BVN cell holds a string that does not
/// start with `2`. Non-string cells are never flagged, whatever they hold.
pub fn find_invalid_bvn_rows(sheet: &Sheet) -> FlaggedRows {
    let mut flagged = FlaggedRows::default();
    for (row_idx, row) in sheet.data_rows() {
        let invalid = matches!(
            row.get(BVN_COLUMN),
            Some(CellValue::Text(s)) if !s.starts_with('2')
        );
        if invalid {
            flagged.push(row_idx, row);
        }
    }
    flagged
}

/// Write header + flagged rows to `dest`, then delete the flagged indices
/// from the source. No document is written when nothing was flagged.
pub fn quarantine_rows(
    sheet: &mut Sheet,
    flagged: &FlaggedRows,
    title: &str,
    dest: &Path,
) -> Result<usize, PipelineError> {
    if flagged.is_empty() {
        return Ok(0);
    }
    let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(flagged.len() + 1);
    rows.push(sheet.header().to_vec());
    rows.extend(flagged.rows.iter().cloned());
    workbook::write_rows_as_workbook(title, &rows, dest)?;
    sheet.delete_rows(&flagged.indices);
    info!("quarantined {} row(s) to {}", flagged.len(), dest.display());
    Ok(flagged.len())
}
