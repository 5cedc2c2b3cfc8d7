// ============================================================
// Layer 4 — Preprocessed Table Loader
// ============================================================
// Reads one preprocessed corpus file into TokenRows.
//
// File format:
//   - UTF-8, tab separated, no header
//   - 7 columns: book, sent_num, token_num, token, lemma,
//                pos_tag, gold_label
//   - blank lines separate sentences and must be KEPT
//   - the quote character is a backslash, so '"' and '\''
//     tokens pass through untouched
//
// One csv reader runs over the whole text. It skips empty
// lines without reporting them, so before each record the
// '\n' bytes it is about to skip are counted and turned into
// blank rows. The terminator is '\n' alone: a CRLF file leaves
// '\r' on the last field (stripped) and on its empty lines,
// which come back as one-field "\r" records (blank rows).
//
// Any malformed line fails the whole file. There is no partial
// result.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator};

use crate::domain::token_row::{TokenRow, INPUT_COLUMNS};
use crate::domain::traits::TableSource;
use crate::error::{FeatureError, FeatureResult};

/// Loads a preprocessed `.txt` table from disk
pub struct TsvTableLoader {
    path: PathBuf,
}

impl TsvTableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for TsvTableLoader {
    fn name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    fn load_rows(&self) -> FeatureResult<Vec<TokenRow>> {
        let bytes = fs::read(&self.path).map_err(|e| FeatureError::ingestion(&self.path, e))?;
        let text  = String::from_utf8(bytes).map_err(|source| FeatureError::Encoding {
            path: self.path.clone(),
            source,
        })?;

        let rows = parse_table(&text, &self.path)?;
        tracing::debug!("Loaded {} rows from '{}'", rows.len(), self.path.display());
        Ok(rows)
    }
}

/// Parse the full text of a table. `path` is only used in errors.
pub fn parse_table(text: &str, path: &Path) -> FeatureResult<Vec<TokenRow>> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quote(b'\\')
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows   = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let start   = reader.position().clone();
        let skipped = empty_lines_at(text, start.byte());
        rows.extend(std::iter::repeat_with(TokenRow::blank).take(skipped));

        let line_no = start.line() as usize + skipped;
        let more    = reader
            .read_record(&mut record)
            .map_err(|e| FeatureError::ingestion(path, format!("line {line_no}: {e}")))?;
        if !more {
            break;
        }
        rows.push(to_row(&record, line_no, path)?);
    }

    Ok(rows)
}

/// Number of empty lines starting at byte `from`
fn empty_lines_at(text: &str, from: u64) -> usize {
    let rest = usize::try_from(from)
        .ok()
        .and_then(|i| text.as_bytes().get(i..))
        .unwrap_or_default();
    rest.iter().take_while(|&&b| b == b'\n').count()
}

fn to_row(record: &StringRecord, line_no: usize, path: &Path) -> FeatureResult<TokenRow> {
    // an empty CRLF line
    if record.len() == 1 && &record[0] == "\r" {
        return Ok(TokenRow::blank());
    }

    let found = record.len();
    if found != INPUT_COLUMNS {
        return Err(FeatureError::FieldCount {
            path:     path.to_path_buf(),
            line:     line_no,
            found,
            expected: INPUT_COLUMNS,
        });
    }

    let gold_label = record[6].strip_suffix('\r').unwrap_or(&record[6]);
    Ok(TokenRow::new(
        &record[0], &record[1], &record[2], &record[3], &record[4], &record[5], gold_label,
    ))
}
