// ============================================================
// Layer 4 — Reference Corpus Loader
// ============================================================
// Loads the plain-text reference corpus the vocabulary is built
// from (e.g. the Project Gutenberg selection: austen-emma.txt,
// melville-moby_dick.txt, ...).
//
// Each configured path is either:
//   - a file       → read as one text
//   - a directory  → every *.txt file directly inside it,
//                    in file-name order
//
// A path that does not exist, or a file that cannot be read as
// UTF-8, is skipped with a warning; one bad book should not
// stop the vocabulary from being built.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::traits::ReferenceSource;

pub struct ReferenceCorpus {
    paths: Vec<PathBuf>,
}

impl ReferenceCorpus {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Expand directories into their .txt files
    fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_dir() {
                let mut entries: Vec<PathBuf> = fs::read_dir(path)
                    .with_context(|| format!("Cannot read directory '{}'", path.display()))?
                    .filter_map(|entry| entry.ok().map(|e| e.path()))
                    .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("txt"))
                    .collect();
                entries.sort();
                files.extend(entries);
            } else if path.exists() {
                files.push(path.clone());
            } else {
                tracing::warn!("Reference path '{}' does not exist, skipping", path.display());
            }
        }

        Ok(files)
    }
}

impl ReferenceSource for ReferenceCorpus {
    fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn load_texts(&self) -> Result<Vec<String>> {
        let mut texts = Vec::new();

        for file in self.files()? {
            match read_text(&file) {
                Ok(text) => {
                    tracing::debug!("Loaded: {} ({} chars)", file.display(), text.len());
                    texts.push(text);
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", file.display(), e);
                }
            }
        }

        tracing::info!("Loaded {} reference texts", texts.len());
        Ok(texts)
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("'{}' is not valid UTF-8", path.display()))
}
