//! Date normalization to the canonical `DD-Mon-YYYY` text form.

use chrono::{NaiveDate, NaiveDateTime};

use crate::workbook::{CellValue, Sheet};

/// Canonical textual date form, e.g. `05-Jan-2024`.
pub const CANONICAL_DATE_FORMAT: &str = "%d-%b-%Y";

/// Format attempts for text cells, in order; first match wins. Day-first
/// forms come before year-first ones so ambiguous strings resolve
/// day-first, and two-digit-year forms come before four-digit ones because
/// `%Y` would otherwise swallow "23" as the year 23 (`%y` rejects a
/// four-digit year through its trailing digits, so the reverse order is
/// safe). The canonical form itself is in the list, which makes
/// normalization a fixed point.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Per-cell outcome of a normalization attempt. An unparseable value is an
/// expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    Normalized,
    Unchanged,
}

/// Parse a date string with day-first disambiguation.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Rewrite one cell to the canonical form if it holds a date. Native
/// datetimes reformat directly; text parses day-first; anything else is
/// left alone.
pub fn normalize_cell(cell: &mut CellValue) -> DateOutcome {
    match cell {
        CellValue::DateTime(dt) => {
            let formatted = dt.format(CANONICAL_DATE_FORMAT).to_string();
            *cell = CellValue::Text(formatted);
            DateOutcome::Normalized
        }
        CellValue::Text(s) => match parse_day_first(s) {
            Some(date) => {
                *cell = CellValue::Text(date.format(CANONICAL_DATE_FORMAT).to_string());
                DateOutcome::Normalized
            }
            None => DateOutcome::Unchanged,
        },
        _ => DateOutcome::Unchanged,
    }
}

/// Normalize every data-row cell in the given columns; header cells are
/// not touched. Returns how many cells were rewritten.
pub fn normalize_date_columns(sheet: &mut Sheet, columns: &[usize]) -> usize {
    let mut normalized = 0;
    for &col in columns {
        for cell in sheet.data_cells_in_column_mut(col) {
            if normalize_cell(cell) == DateOutcome::Normalized {
                normalized += 1;
            }
        }
    }
    normalized
}
