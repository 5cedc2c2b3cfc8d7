// ============================================================
// Layer 5 — Neighbour Extractor
// ============================================================
// For every row, the previous and next element inside the same
// sentence. Sentences are separated by empty elements (blank
// rows), and sentence edges get sentinel values:
//
//   input   w1    w2    ""    w3
//   prev    bos   w1    ""    bos
//   next    w2    eos   ""    eos
//
// Rules, for position i:
//   prev
//     i == 0                  → "bos"
//     elements[i-1] == ""     → "bos", and row i-1 (the blank
//                               row itself) is patched to ""
//     otherwise               → elements[i-1]
//   next
//     row i-1 emitted an "eos" because row i is blank
//                             → "" (one shot, then reset)
//     i is the last index     → "eos"
//     elements[i+1] == ""     → "eos", arm the one-shot flag
//     otherwise               → elements[i+1]
//
// The blank row is never given "eos" itself; the sentinel sits
// on the last real token before the gap.
//
// This is one left-to-right pass. The prev column is written
// into a pre-sized buffer so position i can patch position i-1.
// It must stay sequential within a table.

pub const BOS: &str = "bos";
pub const EOS: &str = "eos";

/// Parallel previous / next columns, same length as the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Vec<String>,
    pub next:     Vec<String>,
}

/// State carried from one row to the next
#[derive(Debug, Default)]
struct BoundaryState {
    /// The previous row emitted "eos" because this row is blank
    suppress_next: bool,
}

/// Run the neighbour pass over one column.
pub fn extract<S: AsRef<str>>(elements: &[S]) -> Neighbors {
    let len          = elements.len();
    let mut previous = vec![String::new(); len];
    let mut next     = vec![String::new(); len];
    let mut state    = BoundaryState::default();

    for i in 0..len {
        // ── previous ──────────────────────────────────────────────────────────
        if i == 0 {
            previous[i] = BOS.to_string();
        } else {
            let before = elements[i - 1].as_ref();
            if before.is_empty() {
                // the blank row itself gets no neighbour
                previous[i - 1].clear();
                previous[i] = BOS.to_string();
            } else {
                previous[i] = before.to_string();
            }
        }

        // ── next ──────────────────────────────────────────────────────────────
        next[i] = if state.suppress_next {
            state.suppress_next = false;
            String::new()
        } else if i + 1 < len {
            let after = elements[i + 1].as_ref();
            if after.is_empty() {
                state.suppress_next = true;
                EOS.to_string()
            } else {
                after.to_string()
            }
        } else {
            EOS.to_string()
        };
    }

    Neighbors { previous, next }
}
