// ============================================================
// Shared — Error Taxonomy
// ============================================================
// Every failure in the data and feature layers is one of these.
// They are all fatal for the file being processed and never
// affect other files in the same run.
//
//   Ingestion  → the source table is missing or unreadable
//   FieldCount → a non-blank row does not have 7 columns
//   Encoding   → the source table is not valid UTF-8
//   Output     → the feature table could not be written
//
// The application layer wraps these in anyhow with extra context.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while reading, transforming or writing one table
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("cannot read '{path}': {reason}")]
    Ingestion { path: PathBuf, reason: String },

    #[error("malformed row in '{path}' at line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        path:     PathBuf,
        line:     usize,
        found:    usize,
        expected: usize,
    },

    #[error("'{path}' is not valid UTF-8")]
    Encoding {
        path:   PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("cannot write '{path}': {reason}")]
    Output { path: PathBuf, reason: String },
}

impl FeatureError {
    /// Shorthand for an ingestion failure caused by any displayable error
    pub fn ingestion(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Ingestion { path: path.into(), reason: reason.to_string() }
    }

    /// Shorthand for an output failure caused by any displayable error
    pub fn output(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Output { path: path.into(), reason: reason.to_string() }
    }
}

pub type FeatureResult<T> = Result<T, FeatureError>;
