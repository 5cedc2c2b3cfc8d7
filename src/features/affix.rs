// ============================================================
// Layer 5 — Affix Analyser
// ============================================================
// Decides whether a lemma carries a negation affix, and whether
// what is left after removing it is itself a word.
//
//   "unhappy"  → has_affix=1 affix="un"   base_is_word=1 base="happy"
//   "careless" → has_affix=1 affix="less" base_is_word=1 base="care"
//   "go"       → has_affix=0 affix=""     base_is_word=0 base=""
//
// Order of checks:
//   1. Suffixes first. The first suffix (in set order) the lemma
//      ends with is the only one evaluated. Its stem is the lemma
//      with every occurrence of the suffix removed. A stem longer
//      than 2 characters commits the suffix; a shorter one means
//      no suffix for this lemma.
//   2. Prefixes, only when no suffix committed. The first prefix
//      the lemma starts with is the only one evaluated. Its stem
//      is the lemma minus that one leading occurrence and must be
//      longer than 3 characters to commit.
//
// `base` is only filled in when the stem is in the vocabulary.
// Lemmas must already be lowercase. Blank rows have no analysis.

use crate::domain::affixes::{AffixSet, NegationAffixes};
use crate::domain::vocabulary::Vocabulary;

/// Suffix stems must be longer than this (in characters)
pub const MIN_SUFFIX_STEM: usize = 2;
/// Prefix stems must be longer than this (in characters)
pub const MIN_PREFIX_STEM: usize = 3;

/// The four affix features of a non-blank row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixFeatures {
    pub has_affix:    bool,
    pub affix:        String,
    pub base_is_word: bool,
    pub base:         String,
}

impl AffixFeatures {
    fn committed(affix: &str, stem: String, vocab: &Vocabulary) -> Self {
        let base_is_word = vocab.contains(&stem);
        Self {
            has_affix: true,
            affix:     affix.to_string(),
            base_is_word,
            base:      if base_is_word { stem } else { String::new() },
        }
    }
}

/// Analyse one lemma. `None` means a blank row: all four cells empty.
pub fn analyze(
    lemma:    &str,
    prefixes: &AffixSet,
    suffixes: &AffixSet,
    vocab:    &Vocabulary,
) -> Option<AffixFeatures> {
    if lemma.is_empty() {
        return None;
    }

    let by_suffix = suffixes
        .iter()
        .find(|s| lemma.ends_with(s))
        .and_then(|suffix| {
            let stem = lemma.replace(suffix, "");
            (stem.chars().count() > MIN_SUFFIX_STEM)
                .then(|| AffixFeatures::committed(suffix, stem, vocab))
        });

    let features = by_suffix.or_else(|| {
        prefixes
            .iter()
            .find(|p| lemma.starts_with(p))
            .and_then(|prefix| {
                let stem = lemma[prefix.len()..].to_string();
                (stem.chars().count() > MIN_PREFIX_STEM)
                    .then(|| AffixFeatures::committed(prefix, stem, vocab))
            })
    });

    Some(features.unwrap_or_default())
}

/// Analyse a whole lemma column with one affix configuration
pub fn analyze_all<S: AsRef<str>>(
    lemmas:  &[S],
    affixes: &NegationAffixes,
    vocab:   &Vocabulary,
) -> Vec<Option<AffixFeatures>> {
    lemmas
        .iter()
        .map(|l| analyze(l.as_ref(), &affixes.prefixes, &affixes.suffixes, vocab))
        .collect()
}
