//! jackt - command-line driver for the Jack tokenizer.
//!
//! This is the main entry point for the jackt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{JacktError, Result};
use output::OutputFormat;

/// jackt - Jack tokenizer
///
/// Turns Jack source files into token listings and reports lexical errors.
#[derive(Parser, Debug)]
#[command(name = "jackt")]
#[command(author = "Jack Toolchain Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizer for the Jack language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JACKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JACKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JACKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jackt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write token listings
    ///
    /// Tokenizes each input and writes one listing per source file, by
    /// default the nand2tetris `XxxT.xml` file next to the source.
    Tokens(TokensCommand),

    /// Check sources for lexical errors
    ///
    /// Tokenizes each input, prints its token count, and reports the first
    /// lexical error of every file that fails.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Jack source files, or directories of them
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Listing format (default: from config, else xml)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Output directory (default: from config, else next to each source)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print listings to stdout instead of writing files
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Only accept identifiers matching [A-Za-z_][A-Za-z0-9_]*
    #[arg(long)]
    strict_identifiers: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Jack source files, or directories of them
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Only accept identifiers matching [A-Za-z_][A-Za-z0-9_]*
    #[arg(long)]
    strict_identifiers: bool,
}

/// Main entry point for the jackt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; its `verbose` key also raises the log level
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;
    tracing::debug!(config = ?config, "configuration in effect");

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Log filter directive for the given verbosity.
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so that `tokens --stdout` output stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::new(log_filter(verbose));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JacktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        inputs: args.input,
        format: args.format,
        output: args.output,
        stdout: args.stdout,
        strict_identifiers: args.strict_identifiers,
    };
    run_tokens(tokens_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        inputs: args.input,
        strict_identifiers: args.strict_identifiers,
    };
    run_check(check_args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["jackt", "tokens", "Main.jack"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("Main.jack")]);
            assert!(args.format.is_none());
            assert!(!args.stdout);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_requires_input() {
        assert!(Cli::try_parse_from(["jackt", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["jackt", "tokens", "src", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["jackt", "tokens", "src", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_parse_tokens_with_output() {
        let cli = Cli::parse_from(["jackt", "tokens", "src", "-o", "/tmp/out"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("/tmp/out")));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_stdout_conflicts_with_output() {
        assert!(Cli::try_parse_from(["jackt", "tokens", "src", "--stdout", "-o", "out"]).is_err());
    }

    #[test]
    fn test_cli_parse_tokens_multiple_inputs() {
        let cli = Cli::parse_from(["jackt", "tokens", "A.jack", "B.jack", "--stdout"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input.len(), 2);
            assert!(args.stdout);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["jackt", "check", "src", "--strict-identifiers"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("src")]);
            assert!(args.strict_identifiers);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["jackt", "--verbose", "check", "src"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(true), "debug");
        assert_eq!(log_filter(false), "info");
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["jackt", "--config", "/path/to/jackt.toml", "check", "src"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/jackt.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["jackt", "check", "src", "--no-color"]);
        assert!(cli.no_color);
    }
}
