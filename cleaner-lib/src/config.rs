//! Explicit run configuration. The library reads no ambient state; every
//! output location arrives through this value.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output locations for cleaning runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Destination for pipe-delimited exports.
    pub processed_dir: PathBuf,
    /// Destination for quarantine workbooks.
    pub data_quality_dir: PathBuf,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        CleanerConfig {
            processed_dir: PathBuf::from("processed"),
            data_quality_dir: PathBuf::from("data quality"),
        }
    }
}

impl CleanerConfig {
    /// Create both output directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.processed_dir)?;
        fs::create_dir_all(&self.data_quality_dir)
    }
}
