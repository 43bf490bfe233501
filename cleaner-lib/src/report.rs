//! Run reporting: explicit counters returned to the caller instead of a
//! side-channel message stream.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Counters and artifacts from one pipeline run. Not persisted; the caller
/// turns it into user feedback.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub duplicates_removed: usize,
    /// Sanitizer counters: cells that contained the marker, not marker
    /// occurrences.
    pub cells_with_exponential: usize,
    pub cells_with_pipe: usize,
    pub cells_with_carriage_return: usize,
    pub cells_with_line_feed: usize,
    pub blank_rows_quarantined: usize,
    pub invalid_bvn_rows_quarantined: usize,
    pub dates_normalized: usize,
    pub gender_codes_mapped: usize,
    /// Quarantine and export documents written this run, if any.
    pub blank_rows_document: Option<PathBuf>,
    pub invalid_bvn_document: Option<PathBuf>,
    pub export_document: Option<PathBuf>,
}

impl PipelineReport {
    /// Whether the sanitizer changed anything.
    pub fn cleaning_occurred(&self) -> bool {
        self.cells_with_exponential > 0
            || self.cells_with_pipe > 0
            || self.cells_with_carriage_return > 0
            || self.cells_with_line_feed > 0
    }

    /// Human-readable summary, one line per outcome worth mentioning.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.duplicates_removed > 0 {
            lines.push(format!(
                "Removed {} duplicate row(s).",
                self.duplicates_removed
            ));
        } else {
            lines.push("No duplicates found.".to_string());
        }
        if self.cleaning_occurred() {
            if self.cells_with_exponential > 0 {
                lines.push(format!(
                    "Removed exponentials (E+) from {} cell(s).",
                    self.cells_with_exponential
                ));
            }
            if self.cells_with_pipe > 0 {
                lines.push(format!(
                    "Removed pipe symbols (|) from {} cell(s).",
                    self.cells_with_pipe
                ));
            }
            if self.cells_with_carriage_return > 0 {
                lines.push(format!(
                    "Removed carriage returns (\\r) from {} cell(s).",
                    self.cells_with_carriage_return
                ));
            }
            if self.cells_with_line_feed > 0 {
                lines.push(format!(
                    "Removed line breaks (\\n) from {} cell(s).",
                    self.cells_with_line_feed
                ));
            }
        } else {
            lines.push("No cleaning needed.".to_string());
        }
        if let Some(path) = &self.blank_rows_document {
            lines.push(format!(
                "Moved {} blank row(s) to {}.",
                self.blank_rows_quarantined,
                path.display()
            ));
        }
        if let Some(path) = &self.invalid_bvn_document {
            lines.push(format!(
                "Moved {} row(s) with invalid BVN to {}.",
                self.invalid_bvn_rows_quarantined,
                path.display()
            ));
        }
        if self.dates_normalized > 0 {
            lines.push(format!("Normalized {} date cell(s).", self.dates_normalized));
        }
        if self.gender_codes_mapped > 0 {
            lines.push(format!(
                "Mapped {} gender value(s).",
                self.gender_codes_mapped
            ));
        }
        if let Some(path) = &self.export_document {
            lines.push(format!("Pipe-delimited export saved as {}.", path.display()));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_run_summary() {
        let report = PipelineReport::default();
        let lines = report.summary_lines();
        assert!(lines.contains(&"No duplicates found.".to_string()));
        assert!(lines.contains(&"No cleaning needed.".to_string()));
        assert_eq!(lines.len(), 2, "a no-op run reports exactly two lines");
    }

    #[test]
    fn test_summary_mentions_each_counter_once() {
        let report = PipelineReport {
            duplicates_removed: 2,
            cells_with_pipe: 3,
            blank_rows_quarantined: 1,
            blank_rows_document: Some(PathBuf::from("dq/x_BlankRows.xlsx")),
            ..Default::default()
        };
        let lines = report.summary_lines();
        assert!(lines.iter().any(|l| l.contains("2 duplicate row(s)")));
        assert!(lines.iter().any(|l| l.contains("pipe symbols (|) from 3")));
        assert!(lines.iter().any(|l| l.contains("x_BlankRows.xlsx")));
        assert!(!lines.iter().any(|l| l.contains("carriage")));
    }
}
