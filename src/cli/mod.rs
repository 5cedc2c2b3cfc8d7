// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates every piece of work to Layer 2.
//
// Two commands are supported:
//   1. `extract` — writes *_features.txt next to each input
//   2. `vocab`   — builds and saves the reference vocabulary

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExtractArgs, VocabArgs};

#[derive(Parser, Debug)]
#[command(
    name = "negcue-features",
    version,
    about = "Derive per-token features for negation cue detection from preprocessed tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. Routes only, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Extract(args) => run_extract(args),
            Commands::Vocab(args)   => run_vocab(args),
        }
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    use crate::application::extract_use_case::ExtractUseCase;

    let stats = ExtractUseCase::new(args.into()).execute()?;
    for s in &stats {
        println!("{}: {} rows written", s.file, s.rows_written);
    }
    Ok(())
}

fn run_vocab(args: VocabArgs) -> Result<()> {
    use crate::application::vocab_use_case::VocabUseCase;

    let output = args.output.clone();
    let count  = VocabUseCase::new(args.into()).execute()?;
    println!("Saved {} word forms to {}", count, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_flags_parse() {
        let cli = Cli::try_parse_from([
            "negcue-features", "extract",
            "dev_preprocessed.txt",
            "--reference", "gutenberg",
            "--prefix", "un", "--prefix", "non",
            "--jobs", "4",
        ])
        .unwrap();

        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.inputs.len(), 1);
                assert_eq!(args.prefixes, vec!["un", "non"]);
                assert!(args.suffixes.is_empty());
                assert_eq!(args.jobs, 4);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let res = Cli::try_parse_from([
            "negcue-features", "extract", "--reference", "gutenberg", "--jobs", "0",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_extract_requires_reference_or_cache() {
        let res = Cli::try_parse_from(["negcue-features", "extract", "dev_preprocessed.txt"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_extract_accepts_cache_without_reference() {
        let cli = Cli::try_parse_from([
            "negcue-features", "extract", "--vocab-cache", "vocab.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Extract(args) => {
                assert!(args.references.is_empty());
                assert_eq!(args.vocab_cache.as_deref(), Some(std::path::Path::new("vocab.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_vocab_requires_reference() {
        let res = Cli::try_parse_from(["negcue-features", "vocab"]);
        assert!(res.is_err());
    }
}
