//! Command line argument parsing for the Corrigo CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::api::spellcheck::CheckMode;
use crate::api::websearch::SafeSearch;

/// Corrigo - spell checking and web search from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "corrigo")]
#[command(about = "Spell checking and web search against remote HTTP APIs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Corrigo Contributors")]
#[command(long_about = None)]
pub struct CorrigoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorrigoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell-check a sentence and print corrections
    Check(CheckArgs),

    /// Search the web
    Search(SearchArgs),

    /// Search the web, restricted to a single site
    #[command(name = "site-search")]
    SiteSearch(SiteSearchArgs),
}

/// Arguments for spell checking
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text to check
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Subscription key for the spell-check service
    #[arg(short, long, env = "CORRIGO_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Checking mode
    #[arg(short, long, default_value = "spell")]
    pub mode: CheckMode,

    /// Print only the corrected sentence
    #[arg(long)]
    pub correct: bool,

    /// Mark flagged tokens in the original text instead of correcting
    #[arg(long, conflicts_with = "correct")]
    pub highlight: bool,
}

/// Arguments for web search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Subscription key for the web-search service
    #[arg(short, long, env = "CORRIGO_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Number of results to request
    #[arg(short, long, default_value = "10")]
    pub count: u32,

    /// Result offset for pagination
    #[arg(short, long, default_value = "0")]
    pub offset: u32,

    /// Market to search in
    #[arg(long, default_value = "en-gb")]
    pub market: String,

    /// Safe-search filtering level
    #[arg(long, default_value = "moderate")]
    pub safesearch: SafeSearch,

    /// Open the first result in a browser
    #[arg(long)]
    pub open: bool,

    /// Opener command for --open (default: platform opener)
    #[arg(long, value_name = "COMMAND")]
    pub browser: Option<String>,
}

/// Arguments for site-restricted web search
#[derive(Parser, Debug, Clone)]
pub struct SiteSearchArgs {
    /// Site to restrict results to (e.g. example.org)
    #[arg(value_name = "SITE")]
    pub site: String,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Subscription key for the web-search service
    #[arg(short, long, env = "CORRIGO_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Number of results to request
    #[arg(short, long, default_value = "10")]
    pub count: u32,

    /// Result offset for pagination
    #[arg(short, long, default_value = "0")]
    pub offset: u32,

    /// Market to search in
    #[arg(long, default_value = "en-gb")]
    pub market: String,

    /// Safe-search filtering level
    #[arg(long, default_value = "moderate")]
    pub safesearch: SafeSearch,

    /// Open the first result in a browser
    #[arg(long)]
    pub open: bool,

    /// Opener command for --open (default: platform opener)
    #[arg(long, value_name = "COMMAND")]
    pub browser: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_check_command() {
        let args = CorrigoArgs::try_parse_from([
            "corrigo",
            "check",
            "chese on tosat",
            "--key",
            "secret",
            "--mode",
            "proof",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.text, "chese on tosat");
            assert_eq!(check_args.key, "secret");
            assert!(matches!(check_args.mode, CheckMode::Proof));
            assert!(!check_args.correct);
            assert!(!check_args.highlight);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_mode_defaults_to_spell() {
        let args =
            CorrigoArgs::try_parse_from(["corrigo", "check", "text", "--key", "k"]).unwrap();

        if let Command::Check(check_args) = args.command {
            assert!(matches!(check_args.mode, CheckMode::Spell));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_correct_and_highlight_conflict() {
        let result = CorrigoArgs::try_parse_from([
            "corrigo",
            "check",
            "text",
            "--key",
            "k",
            "--correct",
            "--highlight",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_command_defaults() {
        let args =
            CorrigoArgs::try_parse_from(["corrigo", "search", "rust", "--key", "k"]).unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.query, "rust");
            assert_eq!(search_args.count, 10);
            assert_eq!(search_args.offset, 0);
            assert_eq!(search_args.market, "en-gb");
            assert!(matches!(search_args.safesearch, SafeSearch::Moderate));
            assert!(!search_args.open);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_command_overrides() {
        let args = CorrigoArgs::try_parse_from([
            "corrigo",
            "search",
            "rust",
            "--key",
            "k",
            "--count",
            "25",
            "--offset",
            "50",
            "--market",
            "en-us",
            "--safesearch",
            "strict",
            "--open",
            "--browser",
            "firefox",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.count, 25);
            assert_eq!(search_args.offset, 50);
            assert_eq!(search_args.market, "en-us");
            assert!(matches!(search_args.safesearch, SafeSearch::Strict));
            assert!(search_args.open);
            assert_eq!(search_args.browser, Some("firefox".to_string()));
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_site_search_command() {
        let args = CorrigoArgs::try_parse_from([
            "corrigo",
            "site-search",
            "example.org",
            "cheese on toast",
            "--key",
            "k",
            "--open",
        ])
        .unwrap();

        if let Command::SiteSearch(site_args) = args.command {
            assert_eq!(site_args.site, "example.org");
            assert_eq!(site_args.query, "cheese on toast");
            assert!(site_args.open);
        } else {
            panic!("Expected SiteSearch command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args =
            CorrigoArgs::try_parse_from(["corrigo", "check", "t", "--key", "k"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args =
            CorrigoArgs::try_parse_from(["corrigo", "-vv", "check", "t", "--key", "k"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args =
            CorrigoArgs::try_parse_from(["corrigo", "--quiet", "check", "t", "--key", "k"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = CorrigoArgs::try_parse_from([
            "corrigo", "--format", "json", "check", "t", "--key", "k",
        ])
        .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
