// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `extract` and `vocab`
// and all their configurable flags.
//
// clap's derive macros generate the help text, the error
// messages for bad flags, and the string → PathBuf / usize
// conversions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::extract_use_case::ExtractConfig;
use crate::application::vocab_use_case::VocabConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add linear-context features to preprocessed token tables
    Extract(ExtractArgs),

    /// Build the reference vocabulary and save it as a JSON cache
    Vocab(VocabArgs),
}

/// All arguments for the `extract` command.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Preprocessed tables (*_preprocessed.txt). Defaults to the
    /// dev and training splits under ../data
    pub inputs: Vec<PathBuf>,

    /// Plain-text reference file, or directory of .txt files,
    /// the vocabulary is built from (repeatable). Required unless
    /// --vocab-cache is given
    #[arg(long = "reference", value_name = "PATH", required_unless_present = "vocab_cache")]
    pub references: Vec<PathBuf>,

    /// JSON vocabulary cache: loaded when present, written after
    /// a fresh build otherwise
    #[arg(long, value_name = "PATH")]
    pub vocab_cache: Option<PathBuf>,

    /// Negation prefix (repeatable); replaces the default set
    #[arg(long = "prefix", value_name = "AFFIX")]
    pub prefixes: Vec<String>,

    /// Negation suffix (repeatable); replaces the default set
    #[arg(long = "suffix", value_name = "AFFIX")]
    pub suffixes: Vec<String>,

    /// Number of files processed at the same time
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// CSV file per-file statistics are appended to
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,
}

/// Convert CLI ExtractArgs into the application-layer ExtractConfig.
/// The application layer never sees clap types.
impl From<ExtractArgs> for ExtractConfig {
    fn from(a: ExtractArgs) -> Self {
        ExtractConfig {
            inputs:      a.inputs,
            references:  a.references,
            vocab_cache: a.vocab_cache,
            prefixes:    a.prefixes,
            suffixes:    a.suffixes,
            jobs:        usize::from(a.jobs),
            summary:     a.summary,
        }
    }
}

/// All arguments for the `vocab` command
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// Plain-text reference file, or directory of .txt files (repeatable)
    #[arg(long = "reference", value_name = "PATH", required = true)]
    pub references: Vec<PathBuf>,

    /// Where to write the JSON vocabulary
    #[arg(long, default_value = "vocab.json")]
    pub output: PathBuf,
}

impl From<VocabArgs> for VocabConfig {
    fn from(a: VocabArgs) -> Self {
        VocabConfig {
            references: a.references,
            output:     a.output,
        }
    }
}
