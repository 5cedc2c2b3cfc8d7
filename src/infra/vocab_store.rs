// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Builds, saves, and loads the reference vocabulary.
//
// Building:
//   Every reference text is split into word forms with the
//   pattern  \w+|[^\w\s]+  (runs of word characters, or runs of
//   punctuation), each form is lowercased, and the forms are
//   collected into a set. "Don't!" gives "don", "'", "t", "!".
//
// Caching:
//   Splitting a multi-megabyte corpus on every run is wasted
//   work, so the vocabulary can be written to a JSON cache
//   (sorted array of strings) and reloaded next time.
//
//   load_or_build(cache) → references given?  yes → build, save
//                          cache exists?       yes → load it
//                                              no  → build, save
//
//   Explicit references always win over an old cache, so a
//   cache built from another corpus is never picked up silently.
//   An empty vocabulary is never written to the cache.
//
// The vocabulary is read-only once this returns.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use crate::domain::traits::ReferenceSource;
use crate::domain::vocabulary::Vocabulary;

const WORD_PATTERN: &str = r"\w+|[^\w\s]+";

/// Splits raw text into word and punctuation forms
pub struct WordSplitter {
    pattern: Regex,
}

impl WordSplitter {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(WORD_PATTERN).context("Invalid word pattern")?;
        Ok(Self { pattern })
    }

    pub fn words<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }
}

pub struct VocabStore {
    cache: Option<PathBuf>,
}

impl VocabStore {
    /// A store that caches to `cache` when given
    pub fn new(cache: Option<PathBuf>) -> Self {
        Self { cache }
    }

    /// Build from `source` when it has references and refresh the
    /// cache. With no references, load the cache if there is one.
    pub fn load_or_build(&self, source: &dyn ReferenceSource) -> Result<Vocabulary> {
        if let Some(path) = self.cache.as_deref().filter(|p| p.exists()) {
            if source.is_empty() {
                tracing::info!("Loading vocab set from '{}'", path.display());
                let vocab = load(path)?;
                tracing::info!("Done ({} word forms)", vocab.len());
                return Ok(vocab);
            }
            tracing::info!("References given, rebuilding cache '{}'", path.display());
        }

        let vocab = build(source)?;
        match &self.cache {
            Some(path) if vocab.is_empty() => {
                tracing::warn!("Not caching an empty vocabulary to '{}'", path.display());
            }
            Some(path) => save(&vocab, path)?,
            None => {}
        }
        Ok(vocab)
    }
}

/// Build a vocabulary from every text the source yields
pub fn build(source: &dyn ReferenceSource) -> Result<Vocabulary> {
    tracing::info!("Building vocab set...");

    let splitter  = WordSplitter::new()?;
    let mut vocab = Vocabulary::new();

    for text in source.load_texts()? {
        for word in splitter.words(&text) {
            vocab.insert(word);
        }
    }

    if vocab.is_empty() {
        tracing::warn!("Vocabulary is empty; base_is_word will be 0 for every token");
    }
    tracing::info!("Done ({} word forms)", vocab.len());
    Ok(vocab)
}

/// Write a vocabulary as a sorted JSON array
pub fn save(vocab: &Vocabulary, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
    }

    let json = serde_json::to_string(vocab)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

    tracing::info!("Saved {} word forms to '{}'", vocab.len(), path.display());
    Ok(())
}

/// Read a vocabulary written by `save`
pub fn load(path: &Path) -> Result<Vocabulary> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read vocabulary from '{}'", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("'{}' is not a vocabulary file", path.display()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct Texts(Vec<&'static str>);

    impl ReferenceSource for Texts {
        fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        fn load_texts(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|t| t.to_string()).collect())
        }
    }

    #[test]
    fn test_splits_words_and_punctuation() {
        let splitter = WordSplitter::new().unwrap();
        let words: Vec<&str> = splitter.words("Don't stop -- ever!").collect();
        assert_eq!(words, vec!["Don", "'", "t", "stop", "--", "ever", "!"]);
    }

    #[test]
    fn test_build_lowercases_and_dedups() {
        let vocab = build(&Texts(vec!["The happy man.", "the HAPPY dog"])).unwrap();
        assert!(vocab.contains("the"));
        assert!(vocab.contains("happy"));
        assert!(vocab.contains("."));
        assert!(!vocab.contains("The"));
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_save_then_load() {
        let dir   = tempdir().unwrap();
        let path  = dir.path().join("cache").join("vocab.json");
        let vocab = build(&Texts(vec!["possible care hope"])).unwrap();

        save(&vocab, &path).unwrap();
        assert_eq!(load(&path).unwrap(), vocab);
    }

    #[test]
    fn test_load_or_build_writes_then_reuses_cache() {
        let dir   = tempdir().unwrap();
        let cache = dir.path().join("vocab.json");
        let store = VocabStore::new(Some(cache.clone()));

        let first = store.load_or_build(&Texts(vec!["alpha beta"])).unwrap();
        assert!(cache.exists());

        // No references: the cache is the only source
        let second = store.load_or_build(&Texts(vec![])).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_references_rebuild_existing_cache() {
        let dir   = tempdir().unwrap();
        let cache = dir.path().join("vocab.json");
        let store = VocabStore::new(Some(cache.clone()));
        store.load_or_build(&Texts(vec!["alpha beta"])).unwrap();

        let rebuilt = store.load_or_build(&Texts(vec!["gamma"])).unwrap();
        assert!(rebuilt.contains("gamma"));
        assert!(!rebuilt.contains("alpha"));
        assert_eq!(load(&cache).unwrap(), rebuilt);
    }

    #[test]
    fn test_empty_vocabulary_not_cached() {
        let dir   = tempdir().unwrap();
        let cache = dir.path().join("vocab.json");
        let vocab = VocabStore::new(Some(cache.clone()))
            .load_or_build(&Texts(vec!["   "]))
            .unwrap();
        assert!(vocab.is_empty());
        assert!(!cache.exists());
    }

    #[test]
    fn test_without_cache_always_builds() {
        let store = VocabStore::new(None);
        let vocab = store.load_or_build(&Texts(vec!["unhappy"])).unwrap();
        assert!(vocab.contains("unhappy"));
    }
}
