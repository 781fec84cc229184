//! CLI argument parsing for rubric
//!
//! Global flags: --rubric, --lang, --format, --missing, --output, --quiet, --verbose

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_missing_policy;
use rubric_core::missing::MissingPolicy;

pub use output::OutputFormat;

/// Rubric - multilingual evaluation rubric for open content
#[derive(Parser, Debug)]
#[command(name = "rubric")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rubric file (TOML, JSON or YAML); the built-in rubric when omitted
    #[arg(long, global = true, env = "RUBRIC_FILE")]
    pub rubric: Option<PathBuf>,

    /// Language code; unknown codes fall back to the rubric's default language
    #[arg(long, global = true, env = "RUBRIC_LANG")]
    pub lang: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Handling of scores the schema cannot describe (skip, warn, fail)
    #[arg(long, global = true, value_parser = parse_missing_policy)]
    pub missing: Option<MissingPolicy>,

    /// Write output to a file instead of stdout
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Radar chart configuration with one dataset per entity
    Chart(ChartArgs),

    /// HTML comparison table of normalized scores
    Table(TableArgs),

    /// README describing the rubric in the selected language
    Readme,

    /// Factor averages per entity
    Scores,

    /// Languages available in the rubric
    Languages,
}

#[derive(Args, Debug, Default)]
pub struct ChartArgs {
    /// Upper bound of the radar scale (defaults to the configured value)
    #[arg(long)]
    pub scale_max: Option<u32>,
}

#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Leave body rows ragged instead of padding them to the header width
    #[arg(long)]
    pub ragged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        let result = Cli::try_parse_from(["rubric", "--help"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_cli_version() {
        let result = Cli::try_parse_from(["rubric", "--version"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_chart() {
        let cli = Cli::try_parse_from(["rubric", "chart", "--scale-max", "100"]).unwrap();
        match cli.command {
            Some(Commands::Chart(args)) => assert_eq!(args.scale_max, Some(100)),
            other => panic!("Expected Chart command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rubric", "table", "--ragged", "--lang", "nb", "--missing", "fail", "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.lang.as_deref(), Some("nb"));
        assert_eq!(cli.missing, Some(MissingPolicy::Fail));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Some(Commands::Table(TableArgs { ragged: true }))));
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["rubric", "--format", "human", "readme"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);

        let result = Cli::try_parse_from(["rubric", "--format", "xml", "readme"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_rejects_unknown_policy() {
        let result = Cli::try_parse_from(["rubric", "--missing", "ignore", "scores"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["rubric"]).unwrap();
        assert!(cli.command.is_none());
    }
}
