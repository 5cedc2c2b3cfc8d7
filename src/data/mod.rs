// ============================================================
// Layer 4 — Data Layer
// ============================================================
// Everything that touches files lives here.
//
//   preprocessed .txt ──► TsvTableLoader  ──► Vec<TokenRow>
//                                                  │
//                                    (Layer 5 builds features)
//                                                  ▼
//   *_features.txt    ◄── TsvFeatureWriter ◄── Vec<FeatureRow>
//
//   reference .txt    ──► ReferenceCorpus  ──► raw texts for
//                                              the vocabulary
//
// Each module is responsible for exactly one step.

/// Reads preprocessed token tables
pub mod loader;

/// Writes feature tables atomically
pub mod writer;

/// Reads the plain-text reference corpus
pub mod corpus;
