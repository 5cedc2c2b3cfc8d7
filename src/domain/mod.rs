// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the feature pipeline.
//
// Rules for this layer:
//   - NO file I/O
//   - NO feature computation (that's Layer 5)
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what a row, an affix set and a vocabulary ARE,
// not how features are derived from them.

// One input row and one enriched output row
pub mod token_row;

// Negation prefix / suffix sets
pub mod affixes;

// Lowercase reference word forms
pub mod vocabulary;

// Core abstractions (traits) that other layers implement
pub mod traits;
