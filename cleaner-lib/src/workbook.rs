//! In-memory workbook model: calamine-backed loading, owned cell values,
//! and atomic persistence through rust_xlsxwriter.

use std::fmt;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, Worksheet};

use crate::error::PipelineError;

/// A single cell value. Covers the calamine variants the pipeline
/// distinguishes; formula-error cells load as `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// `Empty` or an empty string. The blank-column check treats both as
    /// missing.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Number(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::DateTime(excel_serial_to_datetime(dt.as_f64())),
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) => CellValue::Empty,
        }
    }
}

impl fmt::Display for CellValue {
    /// Canonical text rendering, as emitted by the delimited export.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Number(n) => {
                // Whole numbers render without a fractional part, the way
                // they come back out of a spreadsheet reader.
                if n.fract().abs() < f64::EPSILON && *n >= i64::MIN as f64 && *n <= i64::MAX as f64
                {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Excel serial date to chrono, 1899-12-30 epoch.
fn excel_serial_to_datetime(serial: f64) -> NaiveDateTime {
    let excel_base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let days = serial as i64;
    let seconds = ((serial - days as f64) * 86400.0).round() as i64;
    excel_base.and_hms_opt(0, 0, 0).unwrap() + Duration::days(days) + Duration::seconds(seconds)
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// One worksheet: row 0 is the header, rows 1..N are data rows, cells
/// index-aligned to the header.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Sheet {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn header(&self) -> &[CellValue] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Data rows with their absolute row index (the header is index 0).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &Vec<CellValue>)> + '_ {
        self.rows.iter().enumerate().skip(1)
    }

    /// Every cell of every row, header included.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut CellValue> + '_ {
        self.rows.iter_mut().flatten()
    }

    /// One column across every row, header included. Rows too short to
    /// reach the column are skipped.
    pub fn column_cells_mut(&mut self, col: usize) -> impl Iterator<Item = &mut CellValue> + '_ {
        self.rows.iter_mut().filter_map(move |row| row.get_mut(col))
    }

    /// One column across the data rows only.
    pub fn data_cells_in_column_mut(
        &mut self,
        col: usize,
    ) -> impl Iterator<Item = &mut CellValue> + '_ {
        self.rows
            .iter_mut()
            .skip(1)
            .filter_map(move |row| row.get_mut(col))
    }

    /// Delete the given data rows. Indices refer to the sheet's current
    /// state and are applied in descending order so pending indices stay
    /// valid. Row 0 (the header) is never deleted.
    pub fn delete_rows(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i > 0 && i < self.rows.len())
            .collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        for idx in sorted {
            self.rows.remove(idx);
        }
    }
}

/// One loaded `.xlsx` document, exclusively owned by a pipeline run.
#[derive(Debug)]
pub struct Workbook {
    path: PathBuf,
    pub sheet: Sheet,
}

impl Workbook {
    /// Load the first worksheet of an `.xlsx` file.
    ///
    /// The calamine range is re-anchored to absolute column positions
    /// (left-padded by the range's start column) so positional column
    /// rules hold even when the leading columns are entirely empty.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let load_err = |source| PipelineError::Load {
            path: path.to_path_buf(),
            source,
        };
        let mut xlsx: Xlsx<_> = open_workbook(path).map_err(load_err)?;
        let name = xlsx
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| PipelineError::EmptyWorkbook {
                path: path.to_path_buf(),
            })?;
        let range = xlsx.worksheet_range(&name).map_err(load_err)?;
        if range.is_empty() {
            return Err(PipelineError::EmptyWorkbook {
                path: path.to_path_buf(),
            });
        }
        let pad = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let rows = range
            .rows()
            .map(|row| {
                let mut cells = vec![CellValue::Empty; pad];
                cells.extend(row.iter().map(CellValue::from));
                cells
            })
            .collect();
        Ok(Workbook {
            path: path.to_path_buf(),
            sheet: Sheet::new(name, rows),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the mutated sheet over the original path. Writes a sibling
    /// temp file first and renames it into place, so a failed write never
    /// leaves a half-mutated workbook over the original.
    pub fn save(&self) -> Result<(), PipelineError> {
        let tmp = self.path.with_extension("xlsx.tmp");
        write_rows_as_workbook(self.sheet.name(), self.sheet.rows(), &tmp)?;
        std::fs::rename(&tmp, &self.path).map_err(|source| PipelineError::Persist {
            path: self.path.clone(),
            source,
        })
    }
}

/// Write rows as a fresh single-sheet workbook. The final persistence and
/// the quarantine documents both go through here.
pub fn write_rows_as_workbook(
    title: &str,
    rows: &[Vec<CellValue>],
    dest: &Path,
) -> Result<(), PipelineError> {
    write_sheet(title, rows, dest).map_err(|source| PipelineError::Save {
        path: dest.to_path_buf(),
        source,
    })
}

fn write_sheet(
    title: &str,
    rows: &[Vec<CellValue>],
    dest: &Path,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let mut book = XlsxWorkbook::new();
    let worksheet = book.add_worksheet();
    worksheet.set_name(title)?;
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_idx as u32, col_idx as u16, cell, &datetime_format)?;
        }
    }
    book.save(dest)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    datetime_format: &Format,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Int(i) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        CellValue::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        CellValue::DateTime(dt) => {
            worksheet.write_datetime_with_format(row, col, dt, datetime_format)?;
        }
    }
    Ok(())
}
