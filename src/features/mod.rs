// ============================================================
// Layer 5 — Feature Derivation
// ============================================================
// The per-token features the negation cue classifier consumes.
//
//   pos_category.rs  → Penn tag → one of seven coarse classes
//   neighbors.rs     → previous / next element within a sentence
//   affix.rs         → negation prefix / suffix + base word check
//   table_builder.rs → runs all three over a table and joins them
//
// Everything here is pure and deterministic: no I/O, no global
// state. Affix sets and the vocabulary are passed in.

/// Coarse part-of-speech classes
pub mod pos_category;

/// Sentence-bounded neighbour columns
pub mod neighbors;

/// Negation affix and base-word features
pub mod affix;

/// Orchestrates the transforms over a full table
pub mod table_builder;
