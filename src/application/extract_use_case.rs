// ============================================================
// Layer 2 — ExtractUseCase
// ============================================================
// Orchestrates feature extraction in order:
//
//   Step 1: Resolve affix sets          (Layer 3 - domain)
//   Step 2: Build / load vocabulary     (Layer 6 - infra)
//   Step 3: For every input file:
//             load table                (Layer 4 - data)
//             derive features           (Layer 5 - features)
//             write *_features.txt      (Layer 4 - data)
//   Step 4: Log per-file summary        (Layer 6 - infra)
//
// Files are independent. A file that fails is reported and the
// rest still run; the command fails at the end if any did.
// With jobs > 1 files run on a rayon pool and share the
// vocabulary by reference.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::{
    corpus::ReferenceCorpus,
    loader::TsvTableLoader,
    writer::{output_path_for, TsvFeatureWriter, INPUT_MARKER},
};
use crate::domain::affixes::NegationAffixes;
use crate::domain::traits::TableSource;
use crate::domain::vocabulary::Vocabulary;
use crate::features::table_builder::FeatureTableBuilder;
use crate::infra::{
    summary::{FileStats, SummaryLogger},
    vocab_store::VocabStore,
};

/// Inputs used when none are given on the command line
pub const DEFAULT_INPUTS: [&str; 2] = [
    "../data/SEM-2012-SharedTask-CD-SCO-dev-simple.v2_preprocessed.txt",
    "../data/SEM-2012-SharedTask-CD-SCO-training-simple.v2_preprocessed.txt",
];

// ─── Extraction Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub inputs:      Vec<PathBuf>,
    pub references:  Vec<PathBuf>,
    pub vocab_cache: Option<PathBuf>,
    pub prefixes:    Vec<String>,
    pub suffixes:    Vec<String>,
    pub jobs:        usize,
    pub summary:     Option<PathBuf>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            inputs:      Vec::new(),
            references:  Vec::new(),
            vocab_cache: None,
            prefixes:    Vec::new(),
            suffixes:    Vec::new(),
            jobs:        1,
            summary:     None,
        }
    }
}

impl ExtractConfig {
    /// Configured inputs, or the two default tables
    pub fn resolved_inputs(&self) -> Vec<PathBuf> {
        if self.inputs.is_empty() {
            DEFAULT_INPUTS.into_iter().map(PathBuf::from).collect()
        } else {
            self.inputs.clone()
        }
    }
}

// ─── ExtractUseCase ───────────────────────────────────────────────────────────
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Run the whole extraction. Returns per-file stats of the files
    /// that succeeded; errors if any file failed.
    pub fn execute(&self) -> Result<Vec<FileStats>> {
        let cfg = &self.config;
        tracing::debug!("Extract config: {}", serde_json::to_string(cfg)?);

        // ── Step 1: Affix sets ────────────────────────────────────────────────
        let affixes = NegationAffixes::with_overrides(&cfg.prefixes, &cfg.suffixes);

        // ── Step 2: Vocabulary ────────────────────────────────────────────────
        let corpus = ReferenceCorpus::new(cfg.references.clone());
        let vocab  = VocabStore::new(cfg.vocab_cache.clone()).load_or_build(&corpus)?;
        if vocab.is_empty() {
            anyhow::bail!(
                "Vocabulary is empty; give a --reference corpus or a non-empty --vocab-cache"
            );
        }

        // ── Step 3: Process each file ─────────────────────────────────────────
        let inputs = cfg.resolved_inputs();
        let results: Vec<(PathBuf, Result<FileStats>)> = if cfg.jobs > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(cfg.jobs)
                .build()
                .context("Cannot start worker pool")?;
            pool.install(|| {
                inputs
                    .par_iter()
                    .map(|p| (p.clone(), extract_file(p, &affixes, &vocab)))
                    .collect()
            })
        } else {
            inputs
                .iter()
                .map(|p| (p.clone(), extract_file(p, &affixes, &vocab)))
                .collect()
        };

        // ── Step 4: Report ────────────────────────────────────────────────────
        let logger = cfg.summary.as_ref().map(SummaryLogger::new).transpose()?;

        let mut done   = Vec::new();
        let mut failed = 0usize;
        for (path, result) in results {
            match result {
                Ok(stats) => {
                    if let Some(logger) = &logger {
                        logger.log(&stats)?;
                    }
                    done.push(stats);
                }
                Err(e) => {
                    tracing::error!("Failed to extract features from '{}': {:#}", path.display(), e);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{} of {} files failed", failed, inputs.len());
        }
        Ok(done)
    }
}

/// Extract one file end to end. Writes nothing unless it succeeds.
pub fn extract_file(
    input:   &Path,
    affixes: &NegationAffixes,
    vocab:   &Vocabulary,
) -> Result<FileStats> {
    let loader = TsvTableLoader::new(input);
    let name   = loader.name();

    if !name.contains(INPUT_MARKER) {
        tracing::warn!("'{}' does not end in '{}'", name, INPUT_MARKER);
    }
    tracing::info!("Extracting features from {}", name);

    let mut writer = TsvFeatureWriter::new(output_path_for(input));
    let stats = FeatureTableBuilder::new(affixes, vocab)
        .run(&loader, &mut writer)
        .with_context(|| format!("Feature extraction failed for '{}'", input.display()))?;

    tracing::info!(
        "{}: wrote {} rows to '{}' ({} rows dropped)",
        name,
        stats.rows_written,
        writer.path().display(),
        stats.dropped_rows(),
    );

    Ok(FileStats::new(name, &stats))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DEV: &str = "\
wisteria01\t0\t0\tIt\tit\tPRP\tO
wisteria01\t0\t1\tis\tbe\tVBZ\tO
wisteria01\t0\t2\tImpossible\timpossible\tJJ\tB-NEG
wisteria01\t0\t3\t.\t.\t.\tO

wisteria01\t1\t0\tCareless\tcareless\tJJ\tB-NEG
wisteria01\t1\t1\tfellow\tfellow\tNN\tO

";

    fn setup(dir: &Path) -> ExtractConfig {
        let input = dir.join("dev_preprocessed.txt");
        fs::write(&input, DEV).unwrap();
        let reference = dir.join("ref.txt");
        fs::write(&reference, "It is possible that he may care.").unwrap();

        ExtractConfig {
            inputs:     vec![input],
            references: vec![reference],
            ..ExtractConfig::default()
        }
    }

    #[test]
    fn test_default_inputs_when_none_given() {
        let inputs = ExtractConfig::default().resolved_inputs();
        assert_eq!(inputs.len(), 2);
        assert!(inputs[0].to_string_lossy().ends_with("dev-simple.v2_preprocessed.txt"));
    }

    #[test]
    fn test_writes_feature_table() {
        let dir   = tempdir().unwrap();
        let cfg   = setup(dir.path());
        let stats = ExtractUseCase::new(cfg).execute().unwrap();

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].rows_read, 8);
        assert_eq!(stats[0].rows_written, 6);
        assert_eq!(stats[0].affixed_tokens, 2);
        assert_eq!(stats[0].base_words, 2);

        let text  = fs::read_to_string(dir.path().join("dev_features.txt")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("book\tsent_num\ttoken_num\ttoken\tlemma\tpos_tag"));
        assert_eq!(
            lines[3],
            "wisteria01\t0\t2\timpossible\timpossible\tJJ\tADJ\tis\t.\tbe\t.\t1\tim\t1\tpossible\tB-NEG"
        );
        assert_eq!(
            lines[5],
            "wisteria01\t1\t0\tcareless\tcareless\tJJ\tADJ\tbos\tfellow\tbos\tfellow\t1\tless\t1\tcare\tB-NEG"
        );
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempdir().unwrap();
        let cfg = setup(dir.path());
        let out = dir.path().join("dev_features.txt");

        ExtractUseCase::new(cfg.clone()).execute().unwrap();
        let first = fs::read(&out).unwrap();
        ExtractUseCase::new(cfg).execute().unwrap();
        let second = fs::read(&out).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_file_does_not_stop_others() {
        let dir     = tempdir().unwrap();
        let mut cfg = setup(dir.path());
        let bad     = dir.path().join("bad_preprocessed.txt");
        fs::write(&bad, "only\tthree\tfields\n").unwrap();
        cfg.inputs.insert(0, bad);

        let err = ExtractUseCase::new(cfg).execute().unwrap_err();
        assert!(err.to_string().contains("1 of 2 files failed"));
        assert!(!dir.path().join("bad_features.txt").exists());
        assert!(dir.path().join("dev_features.txt").exists());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir     = tempdir().unwrap();
        let mut cfg = setup(dir.path());
        let second  = dir.path().join("training_preprocessed.txt");
        fs::write(&second, DEV).unwrap();
        cfg.inputs.push(second);

        ExtractUseCase::new(cfg.clone()).execute().unwrap();
        let sequential = fs::read(dir.path().join("training_features.txt")).unwrap();

        cfg.jobs = 2;
        let stats = ExtractUseCase::new(cfg).execute().unwrap();
        assert_eq!(stats.len(), 2);
        let parallel = fs::read(dir.path().join("training_features.txt")).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let dir     = tempdir().unwrap();
        let mut cfg = setup(dir.path());
        cfg.references.clear();

        let err = ExtractUseCase::new(cfg).execute().unwrap_err();
        assert!(err.to_string().contains("Vocabulary is empty"));
        assert!(!dir.path().join("dev_features.txt").exists());
    }

    #[test]
    fn test_unreadable_references_leave_vocabulary_empty() {
        let dir     = tempdir().unwrap();
        let mut cfg = setup(dir.path());
        cfg.references = vec![dir.path().join("no_such_corpus")];

        assert!(ExtractUseCase::new(cfg).execute().is_err());
        assert!(!dir.path().join("dev_features.txt").exists());
    }

    #[test]
    fn test_summary_appended() {
        let dir     = tempdir().unwrap();
        let mut cfg = setup(dir.path());
        let summary = dir.path().join("summary.csv");
        cfg.summary = Some(summary.clone());

        ExtractUseCase::new(cfg).execute().unwrap();
        let text = fs::read_to_string(summary).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("dev_preprocessed.txt,8,2,6,2,2"));
    }
}
