// ============================================================
// Layer 4 — Feature Table Writer
// ============================================================
// Writes the finished feature table as tab-separated text with
// a header row. Column order and header names come from the
// FeatureRow struct itself.
//
// All-or-nothing: rows go to a NamedTempFile next to the final
// path, and the temp file is persisted over the target only
// after the last row has been flushed. A failure part way
// through leaves no output file behind. The temp file is
// created owner-only; it is set to 0644 before the rename.
//
// Output naming:
//   dev_preprocessed.txt  → dev_features.txt
//   dev.txt               → dev_features.txt
//   dev                   → dev_features.txt

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tempfile::NamedTempFile;

use crate::domain::token_row::FeatureRow;
use crate::domain::traits::FeatureSink;
use crate::error::{FeatureError, FeatureResult};

/// Filename marker of preprocessed input tables
pub const INPUT_MARKER: &str = "_preprocessed.txt";
/// Filename marker of feature tables
pub const OUTPUT_MARKER: &str = "_features.txt";

/// Where the feature table for `input` is written
pub fn output_path_for(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let out_name = if name.contains(INPUT_MARKER) {
        name.replace(INPUT_MARKER, OUTPUT_MARKER)
    } else {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{stem}{OUTPUT_MARKER}")
    };

    input.with_file_name(out_name)
}

/// Writes a feature table to one path, atomically
pub struct TsvFeatureWriter {
    path: PathBuf,
}

impl TsvFeatureWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn err(&self, reason: impl ToString) -> FeatureError {
        FeatureError::output(&self.path, reason)
    }
}

impl FeatureSink for TsvFeatureWriter {
    fn write_rows(&mut self, rows: &[FeatureRow]) -> FeatureResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let tmp = NamedTempFile::new_in(&dir).map_err(|e| self.err(e))?;
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(tmp);

        // The header is written explicitly so an empty table still has one.
        writer.write_record(FeatureRow::HEADER).map_err(|e| self.err(e))?;
        for row in rows {
            writer.serialize(row).map_err(|e| self.err(e))?;
        }

        let mut tmp = writer.into_inner().map_err(|e| self.err(e.error()))?;
        tmp.flush().map_err(|e| self.err(e))?;
        publish_permissions(tmp.as_file()).map_err(|e| self.err(e))?;
        tmp.persist(&self.path).map_err(|e| self.err(e.error))?;

        tracing::debug!("Wrote {} feature rows to '{}'", rows.len(), self.path.display());
        Ok(())
    }
}

/// Mode of a finished table: owner read/write, everyone else read
#[cfg(unix)]
fn publish_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn publish_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}
