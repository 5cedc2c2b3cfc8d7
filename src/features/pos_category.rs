// ============================================================
// Layer 5 — POS Categoriser
// ============================================================
// Collapses Penn Treebank tags into seven coarse classes:
//
//   JJ JJR JJS                  → ADJ
//   NN NNS NNP NNPS             → NN
//   RB RBR RBS                  → ADV
//   PRP PRP$                    → PRO
//   VB VBD VBG VBN VBP VBZ      → VERB
//   first char is punctuation   → PUNCT
//   anything else               → OTH
//
// An empty tag means a blank boundary row and maps to "".
// First match wins, checked in the order above.

const ADJ:  [&str; 3] = ["JJ", "JJR", "JJS"];
const NN:   [&str; 4] = ["NN", "NNS", "NNP", "NNPS"];
const ADV:  [&str; 3] = ["RB", "RBR", "RBS"];
const PRO:  [&str; 2] = ["PRP", "PRP$"];
const VERB: [&str; 6] = ["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];

/// The coarse class of a single tag.
pub fn categorize(tag: &str) -> &'static str {
    if tag.is_empty() {
        ""
    } else if ADJ.contains(&tag) {
        "ADJ"
    } else if NN.contains(&tag) {
        "NN"
    } else if ADV.contains(&tag) {
        "ADV"
    } else if PRO.contains(&tag) {
        "PRO"
    } else if VERB.contains(&tag) {
        "VERB"
    } else if tag.chars().next().is_some_and(|c| c.is_ascii_punctuation()) {
        "PUNCT"
    } else {
        "OTH"
    }
}

/// Categorise a whole column, one output per input row
pub fn categorize_all<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter().map(|t| categorize(t.as_ref()).to_string()).collect()
}
