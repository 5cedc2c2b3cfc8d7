// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The feature builder never talks to the file system directly.
// It reads rows from a TableSource and hands finished rows to a
// FeatureSink, so the same builder runs over a TSV file in
// production and over an in-memory Vec in tests.
//
// Implementations:
//   - TsvTableLoader   → TableSource over a preprocessed file
//   - Vec<TokenRow>    → TableSource for tests
//   - TsvFeatureWriter → FeatureSink writing the feature table
//   - Vec<FeatureRow>  → FeatureSink for tests
//   - ReferenceCorpus  → ReferenceSource over .txt files

use anyhow::Result;

use crate::domain::token_row::{FeatureRow, TokenRow};
use crate::error::FeatureResult;

// ─── TableSource ──────────────────────────────────────────────────────────────
/// Anything that yields the full ordered row sequence of one table,
/// blank boundary rows included.
pub trait TableSource {
    /// Human-readable name used in logs
    fn name(&self) -> String;

    fn load_rows(&self) -> FeatureResult<Vec<TokenRow>>;
}

impl TableSource for Vec<TokenRow> {
    fn name(&self) -> String {
        "<memory>".to_string()
    }

    fn load_rows(&self) -> FeatureResult<Vec<TokenRow>> {
        Ok(self.clone())
    }
}

// ─── FeatureSink ──────────────────────────────────────────────────────────────
/// Anything that accepts the finished feature table in one piece.
/// Either every row lands or none does.
pub trait FeatureSink {
    fn write_rows(&mut self, rows: &[FeatureRow]) -> FeatureResult<()>;
}

impl FeatureSink for Vec<FeatureRow> {
    fn write_rows(&mut self, rows: &[FeatureRow]) -> FeatureResult<()> {
        self.extend_from_slice(rows);
        Ok(())
    }
}

// ─── ReferenceSource ──────────────────────────────────────────────────────────
/// Any component that can supply raw reference text for building
/// the vocabulary.
pub trait ReferenceSource {
    /// True when no reference text is configured at all
    fn is_empty(&self) -> bool;

    fn load_texts(&self) -> Result<Vec<String>>;
}
