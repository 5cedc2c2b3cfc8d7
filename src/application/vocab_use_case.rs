// ============================================================
// Layer 2 — VocabUseCase
// ============================================================
// Builds the reference vocabulary once and writes it to a JSON
// cache, so later `extract` runs can pass --vocab-cache and
// skip splitting the whole reference corpus again.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::corpus::ReferenceCorpus;
use crate::infra::vocab_store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabConfig {
    pub references: Vec<PathBuf>,
    pub output:     PathBuf,
}

pub struct VocabUseCase {
    config: VocabConfig,
}

impl VocabUseCase {
    pub fn new(config: VocabConfig) -> Self {
        Self { config }
    }

    /// Build and save; returns the number of word forms written
    pub fn execute(&self) -> Result<usize> {
        let corpus = ReferenceCorpus::new(self.config.references.clone());
        let vocab  = vocab_store::build(&corpus)?;
        vocab_store::save(&vocab, &self.config.output)?;
        Ok(vocab.len())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builds_and_saves() {
        let dir = tempdir().unwrap();
        let reference = dir.path().join("emma.txt");
        fs::write(&reference, "Emma was not unhappy.").unwrap();
        let output = dir.path().join("vocab.json");

        let count = VocabUseCase::new(VocabConfig {
            references: vec![reference],
            output:     output.clone(),
        })
        .execute()
        .unwrap();

        assert_eq!(count, 5);
        let vocab = vocab_store::load(&output).unwrap();
        assert!(vocab.contains("unhappy"));
        assert!(vocab.contains("emma"));
    }
}
