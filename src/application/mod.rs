// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one command each.
//
// Rules for this layer:
//   - No feature logic here (that's Layer 5)
//   - No printing to stdout (that's Layer 1)
//   - No direct file parsing (that's Layer 4)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.

// The feature extraction workflow
pub mod extract_use_case;

// The stand-alone vocabulary build
pub mod vocab_use_case;
