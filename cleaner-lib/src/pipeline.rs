//! The per-document processing pipeline: fixed stage order, explicit
//! configuration, one report per run.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::CleanerConfig;
use crate::doctype::{DocumentType, column_indices, has_accepted_extension};
use crate::error::PipelineError;
use crate::report::PipelineReport;
use crate::stages::{dates, dedupe, export, gender, quarantine, sanitize};
use crate::workbook::Workbook;

/// Run the full cleaning pipeline for one workbook of a known type.
///
/// Stage order is fixed and significant: deduplication sees raw values,
/// sanitization runs before either quarantine scan so quarantine decisions
/// see cleaned text, and the date/gender transforms only touch rows that
/// survived both quarantines. The corrected workbook replaces the original
/// through a temp-file rename; quarantine documents and the delimited
/// export land in the configured output folders.
pub fn process_workbook(
    path: &Path,
    doc_type: DocumentType,
    config: &CleanerConfig,
) -> Result<PipelineReport, PipelineError> {
    let type_config = doc_type.config();
    let mut report = PipelineReport::default();
    let mut workbook = Workbook::load(path)?;

    info!("processing {} as {}", path.display(), doc_type.label());

    report.duplicates_removed = dedupe::remove_duplicates(&mut workbook.sheet);

    let counts = sanitize::sanitize_sheet(&mut workbook.sheet);
    report.cells_with_exponential = counts.exponential;
    report.cells_with_pipe = counts.pipe;
    report.cells_with_carriage_return = counts.carriage_return;
    report.cells_with_line_feed = counts.line_feed;

    let blank_columns = column_indices(type_config.blank_check_columns);
    let flagged = quarantine::find_blank_rows(&workbook.sheet, &blank_columns);
    if !flagged.is_empty() {
        let dest = quarantine_path(path, &config.data_quality_dir, quarantine::BLANK_ROWS_SUFFIX);
        report.blank_rows_quarantined = quarantine::quarantine_rows(
            &mut workbook.sheet,
            &flagged,
            quarantine::BLANK_ROWS_TITLE,
            &dest,
        )?;
        report.blank_rows_document = Some(dest);
    }

    // Indices recomputed against the already-mutated sheet; nothing from
    // the blank scan survives into this one.
    let flagged = quarantine::find_invalid_bvn_rows(&workbook.sheet);
    if !flagged.is_empty() {
        let dest = quarantine_path(path, &config.data_quality_dir, quarantine::INVALID_BVN_SUFFIX);
        report.invalid_bvn_rows_quarantined = quarantine::quarantine_rows(
            &mut workbook.sheet,
            &flagged,
            quarantine::INVALID_BVN_TITLE,
            &dest,
        )?;
        report.invalid_bvn_document = Some(dest);
    }

    let date_columns = column_indices(type_config.date_columns);
    report.dates_normalized = dates::normalize_date_columns(&mut workbook.sheet, &date_columns);

    if !type_config.gender_columns.is_empty() {
        let gender_columns = column_indices(type_config.gender_columns);
        report.gender_codes_mapped =
            gender::map_gender_codes(&mut workbook.sheet, &gender_columns);
    }

    workbook.save()?;

    if type_config.exports_delimited {
        let dest = export_path(path, &config.processed_dir);
        export::export_pipe_delimited(&workbook.sheet, &dest)?;
        report.export_document = Some(dest);
    }

    debug!("finished {}: {:?}", path.display(), report);
    Ok(report)
}

/// Gate and dispatch one incoming file, then run the pipeline. Files with
/// the wrong extension or no recognizable type marker are rejected before
/// any side effect.
pub fn process_uploaded_file(
    path: &Path,
    config: &CleanerConfig,
) -> Result<PipelineReport, PipelineError> {
    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if !has_accepted_extension(path) {
        return Err(PipelineError::UnsupportedExtension {
            filename: filename.to_string(),
        });
    }
    let Some(doc_type) = DocumentType::from_filename(filename) else {
        return Err(PipelineError::UnknownDocumentType {
            filename: filename.to_string(),
        });
    };
    process_workbook(path, doc_type, config)
}

fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or_default()
}

/// `<data_quality_dir>/<stem><suffix>.xlsx`
fn quarantine_path(source: &Path, dir: &Path, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}.xlsx", file_stem(source), suffix))
}

/// `<processed_dir>/<stem>.txt`
fn export_path(source: &Path, dir: &Path) -> PathBuf {
    dir.join(format!("{}.txt", file_stem(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_output_paths() {
        let source = Path::new("intake/Bank_Individual-Borrower_Q1.xlsx");
        assert_eq!(
            quarantine_path(source, Path::new("data quality"), quarantine::BLANK_ROWS_SUFFIX),
            PathBuf::from("data quality/Bank_Individual-Borrower_Q1_BlankRows.xlsx")
        );
        assert_eq!(
            quarantine_path(source, Path::new("data quality"), quarantine::INVALID_BVN_SUFFIX),
            PathBuf::from("data quality/Bank_Individual-Borrower_Q1_InvalidBVN.xlsx")
        );
        assert_eq!(
            export_path(source, Path::new("processed")),
            PathBuf::from("processed/Bank_Individual-Borrower_Q1.txt")
        );
    }

    #[test]
    fn test_rejection_before_side_effects() {
        let config = CleanerConfig::default();
        let err = process_uploaded_file(Path::new("report.pdf"), &config).unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedExtension { .. }));

        let err = process_uploaded_file(Path::new("Unknown_Type.xlsx"), &config).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownDocumentType { .. }));
    }
}
