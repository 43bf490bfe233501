//! Error taxonomy for a pipeline run.
//!
//! Stage-local issues (an unparseable date cell) never surface here; they
//! resolve inside their stage. Everything below is document-level and
//! aborts the run for that document only.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not read workbook {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("workbook {path} has no rows")]
    EmptyWorkbook { path: PathBuf },

    #[error("could not write workbook {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("could not replace workbook {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write export {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{filename}: unsupported file type, expected .xlsx")]
    UnsupportedExtension { filename: String },

    #[error("{filename}: filename does not contain a known document-type marker")]
    UnknownDocumentType { filename: String },
}
