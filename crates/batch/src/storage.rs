//! Output storage layout

use chrono::{Datelike, NaiveDate};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Where generated documents are written
///
/// Passed explicitly to the engine at construction so tests can point it at
/// a temporary directory.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub output_root: PathBuf,
}

impl StorageConfig {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Directory for documents generated in `date`'s month:
    /// `output_root/YYYY/MM`, created if absent.
    pub fn generated_dir_for(&self, date: NaiveDate) -> io::Result<PathBuf> {
        let dir = self
            .output_root
            .join(date.year().to_string())
            .join(format!("{:02}", date.month()));
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
