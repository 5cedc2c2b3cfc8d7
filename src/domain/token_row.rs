// ============================================================
// Layer 3 — Token and Feature Rows
// ============================================================
// A TokenRow is one line of the preprocessed corpus table:
//
//   book  sent_num  token_num  token  lemma  pos_tag  gold_label
//
// Blank lines in the table become blank TokenRows. They mark
// sentence / document boundaries and carry no data, but they
// are kept in sequence because adjacency is load-bearing for
// the neighbour features.
//
// A FeatureRow is the enriched output row. Its field order IS
// the published column order of the feature table, and the
// field names are the header names (csv + serde write the
// header straight from this struct).
//
// All numeric-looking columns stay opaque strings.

use serde::{Deserialize, Serialize};

/// Number of columns in the preprocessed input table
pub const INPUT_COLUMNS: usize = 7;

/// One row of the preprocessed corpus table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub book:       String,
    pub sent_num:   String,
    pub token_num:  String,
    pub token:      String,
    pub lemma:      String,
    pub pos_tag:    String,
    pub gold_label: String,
}

impl TokenRow {
    /// Create a row from its seven columns in table order
    pub fn new(
        book:       impl Into<String>,
        sent_num:   impl Into<String>,
        token_num:  impl Into<String>,
        token:      impl Into<String>,
        lemma:      impl Into<String>,
        pos_tag:    impl Into<String>,
        gold_label: impl Into<String>,
    ) -> Self {
        Self {
            book:       book.into(),
            sent_num:   sent_num.into(),
            token_num:  token_num.into(),
            token:      token.into(),
            lemma:      lemma.into(),
            pos_tag:    pos_tag.into(),
            gold_label: gold_label.into(),
        }
    }

    /// A boundary row: every column empty
    pub fn blank() -> Self {
        Self::default()
    }

    /// True when every string field is empty
    pub fn is_blank(&self) -> bool {
        self.book.is_empty()
            && self.sent_num.is_empty()
            && self.token_num.is_empty()
            && self.token.is_empty()
            && self.lemma.is_empty()
            && self.pos_tag.is_empty()
            && self.gold_label.is_empty()
    }
}

/// One row of the feature table, in published column order.
///
/// `has_affix` and `base_is_word` are `None` on blank rows, which
/// serialises as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub book:         String,
    pub sent_num:     String,
    pub token_num:    String,
    pub token:        String,
    pub lemma:        String,
    pub pos_tag:      String,
    pub pos_category: String,
    pub prev_token:   String,
    pub next_token:   String,
    pub prev_lemma:   String,
    pub next_lemma:   String,
    pub has_affix:    Option<u8>,
    pub affix:        String,
    pub base_is_word: Option<u8>,
    pub base:         String,
    pub gold_label:   String,
}

impl FeatureRow {
    /// Header names of the feature table, in column order
    pub const HEADER: [&'static str; 16] = [
        "book",
        "sent_num",
        "token_num",
        "token",
        "lemma",
        "pos_tag",
        "pos_category",
        "prev_token",
        "next_token",
        "prev_lemma",
        "next_lemma",
        "has_affix",
        "affix",
        "base_is_word",
        "base",
        "gold_label",
    ];

    /// Rows whose book column is empty are boundary markers and are
    /// dropped before the table is written.
    pub fn is_boundary(&self) -> bool {
        self.book.is_empty()
    }
}
