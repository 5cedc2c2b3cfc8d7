// ============================================================
// Layer 5 — Feature Table Builder
// ============================================================
// Runs the three column transforms over one table and joins
// the results back together row by row:
//
//   rows ──┬── token  (lowercased) ── neighbours ── prev/next_token
//          ├── lemma  (lowercased) ─┬ neighbours ── prev/next_lemma
//          │                        └ affixes   ── has_affix, affix,
//          │                                       base_is_word, base
//          ├── pos_tag ── categorise ── pos_category
//          └── book, sent_num, token_num, gold_label (passed through)
//
// Every derived column stays aligned 1:1 with the input rows,
// blank rows included. Only after the join are rows with an
// empty book dropped.
//
// The builder borrows the affix sets and the vocabulary; it
// never owns or mutates them, so one vocabulary can serve many
// builders on many threads.

use serde::{Deserialize, Serialize};

use crate::domain::affixes::NegationAffixes;
use crate::domain::token_row::{FeatureRow, TokenRow};
use crate::domain::traits::{FeatureSink, TableSource};
use crate::domain::vocabulary::Vocabulary;
use crate::error::FeatureResult;
use crate::features::{affix, neighbors, pos_category};

/// Row counts for one processed table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub rows_read:      usize,
    pub blank_rows:     usize,
    pub rows_written:   usize,
    pub affixed_tokens: usize,
    pub base_words:     usize,
}

impl TableStats {
    /// Rows dropped for an empty book, blank separators included
    pub fn dropped_rows(&self) -> usize {
        self.rows_read - self.rows_written
    }

    fn from_rows(input: &[TokenRow], output: &[FeatureRow]) -> Self {
        Self {
            rows_read:      input.len(),
            blank_rows:     input.iter().filter(|r| r.is_blank()).count(),
            rows_written:   output.len(),
            affixed_tokens: output.iter().filter(|r| r.has_affix == Some(1)).count(),
            base_words:     output.iter().filter(|r| r.base_is_word == Some(1)).count(),
        }
    }
}

pub struct FeatureTableBuilder<'a> {
    affixes: &'a NegationAffixes,
    vocab:   &'a Vocabulary,
}

impl<'a> FeatureTableBuilder<'a> {
    pub fn new(affixes: &'a NegationAffixes, vocab: &'a Vocabulary) -> Self {
        Self { affixes, vocab }
    }

    /// Derive every feature column and return the rows that survive
    /// the boundary drop, in input order.
    pub fn build(&self, rows: &[TokenRow]) -> Vec<FeatureRow> {
        let tokens: Vec<String> = rows.iter().map(|r| r.token.to_lowercase()).collect();
        let lemmas: Vec<String> = rows.iter().map(|r| r.lemma.to_lowercase()).collect();
        let tags:   Vec<&str>   = rows.iter().map(|r| r.pos_tag.as_str()).collect();

        let categories  = pos_category::categorize_all(&tags);
        let token_ctx   = neighbors::extract(&tokens);
        let lemma_ctx   = neighbors::extract(&lemmas);
        let affix_feats = affix::analyze_all(&lemmas, self.affixes, self.vocab);

        let columns = tokens
            .into_iter()
            .zip(lemmas)
            .zip(categories)
            .zip(token_ctx.previous.into_iter().zip(token_ctx.next))
            .zip(lemma_ctx.previous.into_iter().zip(lemma_ctx.next))
            .zip(affix_feats);

        rows.iter()
            .zip(columns)
            .map(|(row, (((((token, lemma), pos_category), (prev_token, next_token)), (prev_lemma, next_lemma)), analysis))| {
                let (has_affix, affix, base_is_word, base) = match analysis {
                    Some(f) => (
                        Some(u8::from(f.has_affix)),
                        f.affix,
                        Some(u8::from(f.base_is_word)),
                        f.base,
                    ),
                    None => (None, String::new(), None, String::new()),
                };

                FeatureRow {
                    book:         row.book.clone(),
                    sent_num:     row.sent_num.clone(),
                    token_num:    row.token_num.clone(),
                    token,
                    lemma,
                    pos_tag:      row.pos_tag.clone(),
                    pos_category,
                    prev_token,
                    next_token,
                    prev_lemma,
                    next_lemma,
                    has_affix,
                    affix,
                    base_is_word,
                    base,
                    gold_label:   row.gold_label.clone(),
                }
            })
            .filter(|r| !r.is_boundary())
            .collect()
    }

    /// Load a whole table, build it, and hand it to the sink in one
    /// piece. Nothing reaches the sink if loading fails.
    pub fn run<S, K>(&self, source: &S, sink: &mut K) -> FeatureResult<TableStats>
    where
        S: TableSource + ?Sized,
        K: FeatureSink + ?Sized,
    {
        let rows   = source.load_rows()?;
        let output = self.build(&rows);
        let stats  = TableStats::from_rows(&rows, &output);

        tracing::debug!(
            "{}: {} rows read, {} blank, {} dropped",
            source.name(),
            stats.rows_read,
            stats.blank_rows,
            stats.dropped_rows(),
        );

        sink.write_rows(&output)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(book: &str, token: &str, lemma: &str, tag: &str) -> TokenRow {
        TokenRow::new(book, "0", "0", token, lemma, tag, "_")
    }

    fn sample_rows() -> Vec<TokenRow> {
        vec![
            row("baskervilles01", "It", "it", "PRP"),
            row("baskervilles01", "was", "be", "VBD"),
            row("baskervilles01", "Impossible", "impossible", "JJ"),
            row("baskervilles01", ".", ".", "."),
            TokenRow::blank(),
            row("baskervilles01", "Careless", "careless", "JJ"),
            row("baskervilles01", "man", "man", "NN"),
            TokenRow::blank(),
        ]
    }

    #[test]
    fn test_blank_rows_dropped() {
        let affixes = NegationAffixes::default();
        let vocab   = Vocabulary::new();
        let out     = FeatureTableBuilder::new(&affixes, &vocab).build(&sample_rows());
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|r| !r.book.is_empty()));
    }

    #[test]
    fn test_no_blank_rows_keeps_row_count() {
        let affixes = NegationAffixes::default();
        let vocab   = Vocabulary::new();
        let rows: Vec<TokenRow> = sample_rows().into_iter().filter(|r| !r.is_blank()).collect();
        let out = FeatureTableBuilder::new(&affixes, &vocab).build(&rows);
        assert_eq!(out.len(), rows.len());
    }

    #[test]
    fn test_features_joined_positionally() {
        let affixes = NegationAffixes::default();
        let vocab: Vocabulary = ["possible", "care"].into_iter().collect();
        let out = FeatureTableBuilder::new(&affixes, &vocab).build(&sample_rows());

        let impossible = &out[2];
        assert_eq!(impossible.token, "impossible");
        assert_eq!(impossible.pos_category, "ADJ");
        assert_eq!(impossible.prev_token, "was");
        assert_eq!(impossible.next_token, ".");
        assert_eq!(impossible.prev_lemma, "be");
        assert_eq!(impossible.has_affix, Some(1));
        assert_eq!(impossible.affix, "im");
        assert_eq!(impossible.base_is_word, Some(1));
        assert_eq!(impossible.base, "possible");

        let full_stop = &out[3];
        assert_eq!(full_stop.pos_category, "PUNCT");
        assert_eq!(full_stop.next_token, "eos");

        let careless = &out[4];
        assert_eq!(careless.token, "careless");
        assert_eq!(careless.prev_token, "bos");
        assert_eq!(careless.affix, "less");
        assert_eq!(careless.base, "care");

        let man = &out[5];
        assert_eq!(man.next_lemma, "eos");
        assert_eq!(man.has_affix, Some(0));
        assert_eq!(man.base_is_word, Some(0));
    }

    #[test]
    fn test_tokens_and_lemmas_lowercased() {
        let affixes = NegationAffixes::default();
        let vocab   = Vocabulary::new();
        let rows    = vec![row("b", "NOT", "NOT", "RB"), row("b", "Here", "Here", "RB")];
        let out     = FeatureTableBuilder::new(&affixes, &vocab).build(&rows);
        assert_eq!(out[0].token, "not");
        assert_eq!(out[0].lemma, "not");
        assert_eq!(out[0].next_token, "here");
        assert_eq!(out[1].prev_lemma, "not");
    }

    #[test]
    fn test_run_reports_stats_and_fills_sink() {
        let affixes = NegationAffixes::default();
        let vocab: Vocabulary = ["possible"].into_iter().collect();
        let mut sink: Vec<FeatureRow> = Vec::new();

        let stats = FeatureTableBuilder::new(&affixes, &vocab)
            .run(&sample_rows(), &mut sink)
            .unwrap();

        assert_eq!(sink.len(), 6);
        assert_eq!(stats.rows_read, 8);
        assert_eq!(stats.blank_rows, 2);
        assert_eq!(stats.rows_written, 6);
        assert_eq!(stats.affixed_tokens, 2);
        assert_eq!(stats.base_words, 1);
    }

    #[test]
    fn test_blank_count_excludes_bookless_token_rows() {
        let affixes = NegationAffixes::default();
        let vocab   = Vocabulary::new();
        let mut rows = sample_rows();
        rows.push(row("", "stray", "stray", "NN"));
        let mut sink: Vec<FeatureRow> = Vec::new();

        let stats = FeatureTableBuilder::new(&affixes, &vocab)
            .run(&rows, &mut sink)
            .unwrap();

        assert_eq!(stats.rows_read, 9);
        assert_eq!(stats.rows_written, 6);
        assert_eq!(stats.blank_rows, 2);
        assert_eq!(stats.dropped_rows(), 3);
    }
}
