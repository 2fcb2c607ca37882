//! Command-line configuration

use crate::game::round::{DEFAULT_DISCARDS, DEFAULT_HAND_SIZE, DEFAULT_PLAYS};
use crate::game::validation::MIN_WORD_LENGTH;
use crate::game::RoundRules;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Word list file name looked up in the data directory
pub const DICTIONARY_FILE: &str = "dictionary.txt";

/// Form words from letter tiles before your plays run out
#[derive(Parser, Debug)]
#[command(name = "scrabblatro")]
#[command(about = "Form words from letter tiles before your plays run out", long_about = None)]
pub struct Args {
    /// Newline-delimited word list (defaults to dictionary.txt in the data directory)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Seed for reproducible deals
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tiles in a hand
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE as u32, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub hand_size: u32,

    /// Plays per round
    #[arg(long, default_value_t = DEFAULT_PLAYS, value_parser = clap::value_parser!(u32).range(1..=20))]
    pub plays: u32,

    /// Discards per round
    #[arg(long, default_value_t = DEFAULT_DISCARDS, value_parser = clap::value_parser!(u32).range(0..=20))]
    pub discards: u32,

    /// Shortest word that may be played
    #[arg(long, default_value_t = MIN_WORD_LENGTH as u32, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub min_word_length: u32,
}

/// Resolved settings for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub seed: Option<u64>,
    pub rules: RoundRules,
}

impl Config {
    /// Resolve parsed arguments. Rejects a minimum word length that no hand
    /// could ever reach.
    pub fn from_args(args: Args) -> Result<Self, clap::Error> {
        let rules = RoundRules {
            hand_size: args.hand_size as usize,
            plays: args.plays,
            discards: args.discards,
            min_word_length: args.min_word_length as usize,
        };
        if rules.min_word_length > rules.hand_size {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "--min-word-length {} exceeds --hand-size {}",
                    rules.min_word_length, rules.hand_size
                ),
            ));
        }

        Ok(Self {
            dictionary_path: args.dictionary.unwrap_or_else(default_dictionary_path),
            seed: args.seed,
            rules,
        })
    }
}

/// OS data directory copy if present, otherwise the working directory.
///
/// - Linux: `$XDG_DATA_HOME/scrabblatro/` or `~/.local/share/scrabblatro/`
/// - macOS: `~/Library/Application Support/scrabblatro/`
pub fn default_dictionary_path() -> PathBuf {
    ProjectDirs::from("", "", "scrabblatro")
        .map(|dirs| dirs.data_dir().join(DICTIONARY_FILE))
        .filter(|path| path.is_file())
        .unwrap_or_else(|| PathBuf::from(DICTIONARY_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("scrabblatro").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(parse(&[]).unwrap()).unwrap();
        assert_eq!(config.rules, RoundRules::default());
        assert_eq!(config.seed, None);
        assert!(config.dictionary_path.ends_with(DICTIONARY_FILE));
    }

    #[test]
    fn test_explicit_values() {
        let args = parse(&[
            "--dictionary",
            "/tmp/words.txt",
            "--seed",
            "42",
            "--hand-size",
            "9",
            "--plays",
            "5",
            "--discards",
            "0",
            "--min-word-length",
            "4",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.dictionary_path, PathBuf::from("/tmp/words.txt"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.rules,
            RoundRules {
                hand_size: 9,
                plays: 5,
                discards: 0,
                min_word_length: 4,
            }
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(parse(&["--hand-size", "0"]).is_err());
        assert!(parse(&["--plays", "0"]).is_err());
        assert!(parse(&["--hand-size", "13"]).is_err());
    }

    #[test]
    fn test_min_length_beyond_hand_rejected() {
        let args = parse(&["--hand-size", "3", "--min-word-length", "4"]).unwrap();
        let err = Config::from_args(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
