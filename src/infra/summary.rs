// ============================================================
// Layer 6 — Extraction Summary Logger
// ============================================================
// Records one CSV row per processed file:
//
//   file,rows_read,blank_rows,rows_written,affixed_tokens,base_words
//   dev_preprocessed.txt,15067,787,14280,61,49
//
// The header is written only when the file is new, so repeated
// runs append to the same log.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::features::table_builder::TableStats;

/// Statistics for one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub file:           String,
    pub rows_read:      usize,
    pub blank_rows:     usize,
    pub rows_written:   usize,
    pub affixed_tokens: usize,
    pub base_words:     usize,
}

impl FileStats {
    pub fn new(file: impl Into<String>, stats: &TableStats) -> Self {
        Self {
            file:           file.into(),
            rows_read:      stats.rows_read,
            blank_rows:     stats.blank_rows,
            rows_written:   stats.rows_written,
            affixed_tokens: stats.affixed_tokens,
            base_words:     stats.base_words,
        }
    }
}

/// Appends FileStats rows to a CSV file
pub struct SummaryLogger {
    csv_path: PathBuf,
}

impl SummaryLogger {
    pub fn new(csv_path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = csv_path.into();
        if let Some(dir) = csv_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        Ok(Self { csv_path })
    }

    pub fn log(&self, stats: &FileStats) -> Result<()> {
        let is_new = !self.csv_path.exists();
        let file   = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open summary '{}'", self.csv_path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        writer.serialize(stats)?;
        writer.flush()?;

        tracing::debug!("Logged summary for {}", stats.file);
        Ok(())
    }
}
