// ============================================================
// Layer 3 — Negation Affix Sets
// ============================================================
// Two sets of strings fixed at pipeline start:
//
//   prefixes: dis, im, in, ir, un, non
//   suffixes: less, lessness, lessly
//
// The affixes were collected from the training and dev splits
// of the negation corpus; "non" was added by hand.
//
// An AffixSet has set semantics (duplicates collapse) but keeps
// a stable iteration order: the order affixes were first added.
// The affix analyser takes the FIRST matching affix in that
// order, so a stable order keeps repeated runs byte-identical.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIXES: [&str; 6] = ["dis", "im", "in", "ir", "un", "non"];
pub const DEFAULT_SUFFIXES: [&str; 3] = ["less", "lessness", "lessly"];

/// An insertion-ordered set of affix strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AffixSet {
    items: Vec<String>,
}

impl AffixSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an affix. Empty strings and duplicates are ignored.
    /// Returns true when the affix was new.
    pub fn insert(&mut self, affix: impl Into<String>) -> bool {
        let affix = affix.into();
        if affix.is_empty() || self.contains(&affix) {
            return false;
        }
        self.items.push(affix);
        true
    }

    pub fn contains(&self, affix: &str) -> bool {
        self.items.iter().any(|a| a == affix)
    }

    /// Iterate in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AffixSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = AffixSet::new();
        for affix in iter {
            set.insert(affix);
        }
        set
    }
}

impl From<Vec<String>> for AffixSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<AffixSet> for Vec<String> {
    fn from(set: AffixSet) -> Self {
        set.items
    }
}

/// The prefix and suffix sets used for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegationAffixes {
    pub prefixes: AffixSet,
    pub suffixes: AffixSet,
}

impl NegationAffixes {
    /// Replace the default prefixes / suffixes with the given lists,
    /// keeping the default for any list that is empty.
    pub fn with_overrides(prefixes: &[String], suffixes: &[String]) -> Self {
        let defaults = Self::default();
        Self {
            prefixes: if prefixes.is_empty() {
                defaults.prefixes
            } else {
                prefixes.iter().cloned().collect()
            },
            suffixes: if suffixes.is_empty() {
                defaults.suffixes
            } else {
                suffixes.iter().cloned().collect()
            },
        }
    }
}

impl Default for NegationAffixes {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.into_iter().collect(),
            suffixes: DEFAULT_SUFFIXES.into_iter().collect(),
        }
    }
}
