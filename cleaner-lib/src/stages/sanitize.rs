//! Cell-value sanitization: strips the literal markers that corrupt
//! downstream pipe-delimited loads.

use crate::workbook::{CellValue, Sheet};

/// Per-marker counters for one sanitization pass. Each counter is the
/// number of cells that contained the marker, not the number of
/// occurrences removed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeCounts {
    pub exponential: usize,
    pub pipe: usize,
    pub carriage_return: usize,
    pub line_feed: usize,
}

/// Strip `E+`, `|`, CR and LF from every text cell, header included, in
/// that fixed order. Non-text cells are untouched.
pub fn sanitize_sheet(sheet: &mut Sheet) -> SanitizeCounts {
    let mut counts = SanitizeCounts::default();
    for cell in sheet.cells_mut() {
        if let CellValue::Text(value) = cell {
            if value.contains("E+") {
                *value = value.replace("E+", "");
                counts.exponential += 1;
            }
            if value.contains('|') {
                *value = value.replace('|', "");
                counts.pipe += 1;
            }
            if value.contains('\r') {
                *value = value.replace('\r', "");
                counts.carriage_return += 1;
            }
            if value.contains('\n') {
                *value = value.replace('\n', "");
                counts.line_feed += 1;
            }
        }
    }
    counts
}
