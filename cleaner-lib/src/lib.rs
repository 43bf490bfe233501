//! Core cleaning/validation pipeline for credit-bureau submission
//! workbooks: duplicate-row elimination, cell sanitization, blank-column
//! and BVN quarantine, date normalization, gender-code mapping, and
//! pipe-delimited export.

pub mod config;
pub mod doctype;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stages;
pub mod workbook;

pub use config::CleanerConfig;
pub use doctype::DocumentType;
pub use error::PipelineError;
pub use pipeline::{process_uploaded_file, process_workbook};
pub use report::PipelineReport;
