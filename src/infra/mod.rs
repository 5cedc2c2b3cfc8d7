// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one step:
//
//   vocab_store.rs — Reference vocabulary
//                    Splits the reference corpus into word
//                    forms, and saves / loads the resulting
//                    set as a JSON cache so later runs skip
//                    the rebuild.
//
//   summary.rs     — Extraction summary
//                    Appends per-file row counts to a CSV
//                    file for later inspection.

/// Vocabulary building, saving, and loading
pub mod vocab_store;

/// Per-file statistics CSV logger
pub mod summary;
