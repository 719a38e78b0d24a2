//! Tokens command implementation.
//!
//! Tokenizes Jack source files and writes one token listing per file, in
//! the nand2tetris XML format or one of the text and JSON dumps.

use std::path::{Path, PathBuf};
use std::time::Instant;

use jackc_lex::TokenizerOptions;

use crate::commands::common::{
    collect_sources, describe_failure, error_messages, output_messages, tokenize_file,
};
use crate::commands::traits::{Command, CommandSummary};
use crate::config::Config;
use crate::error::{JacktError, Result};
use crate::output::OutputFormat;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files or directories of source files.
    pub inputs: Vec<PathBuf>,
    /// Listing format; falls back to the configuration.
    pub format: Option<OutputFormat>,
    /// Output directory; falls back to the configuration, then to each
    /// source file's directory.
    pub output: Option<PathBuf>,
    /// Print listings to stdout instead of writing files.
    pub stdout: bool,
    /// Reject identifiers outside `[A-Za-z_][A-Za-z0-9_]*`.
    pub strict_identifiers: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Effective listing format.
    pub fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.output.format)
    }

    /// Effective tokenizer options.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        let mut options = self.config.lexer.tokenizer_options();
        options.strict_identifiers |= self.args.strict_identifiers;
        options
    }

    fn verbose(&self) -> bool {
        self.args.verbose || self.config.verbose
    }

    /// Execute the command.
    pub fn run(&self) -> Result<CommandSummary> {
        let start_time = Instant::now();
        let sources = collect_sources(&self.args.inputs)?;
        let format = self.format();
        let options = self.tokenizer_options();

        let mut summary = CommandSummary::default();
        for source in &sources {
            if self.verbose() {
                eprintln!("{} {}", output_messages::PROCESSING_FILE, source.display());
            }
            match self.process_file(source, format, options) {
                Ok(tokens) => summary.record_success(tokens),
                Err(e) => {
                    summary.record_failure();
                    eprintln!("{}", describe_failure(source, &e));
                }
            }
        }

        summary.elapsed = start_time.elapsed();
        if self.verbose() {
            eprintln!(
                "{} {:.2}s",
                output_messages::COMPLETED,
                summary.elapsed.as_secs_f64()
            );
        }
        Ok(summary)
    }

    /// Tokenize one file and emit its listing. Returns the token count.
    fn process_file(
        &self,
        source: &Path,
        format: OutputFormat,
        options: TokenizerOptions,
    ) -> Result<usize> {
        let stream = tokenize_file(source, options)?;
        let listing = format.render(stream.tokens())?;

        if self.args.stdout {
            print!("{}", listing);
        } else {
            let output_path = self.output_path(source, format)?;
            std::fs::write(&output_path, listing)?;
            tracing::debug!(path = %output_path.display(), "listing written");
            if self.verbose() {
                eprintln!("{} {}", output_messages::WROTE_FILE, output_path.display());
            }
        }
        Ok(stream.len())
    }

    /// Where the listing for `source` goes.
    pub fn output_path(&self, source: &Path, format: OutputFormat) -> Result<PathBuf> {
        let file_name = format.output_name(source).ok_or_else(|| {
            JacktError::FileOperation(format!(
                "{} {}",
                error_messages::INVALID_FILE_PATH,
                source.display()
            ))
        })?;

        let dir = self
            .args
            .output
            .clone()
            .or_else(|| self.config.output.dir.clone());
        match dir {
            Some(dir) => {
                if dir.exists() && !dir.is_dir() {
                    return Err(JacktError::Validation(format!(
                        "{} {}",
                        error_messages::OUTPUT_PATH_NOT_DIR,
                        dir.display()
                    )));
                }
                std::fs::create_dir_all(&dir)?;
                Ok(dir.join(file_name))
            }
            None => Ok(source.with_file_name(file_name)),
        }
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<CommandSummary> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }

    fn description() -> &'static str {
        "Write token listings for Jack source files"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    tracing::debug!(command = TokensCommand::name(), "{}", TokensCommand::description());
    let command = TokensCommand::new(args, config);
    command.execute()?.into_result()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LexerConfig, OutputConfig};
    use tempfile::TempDir;

    fn write_source(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_tokens_args_default() {
        let args = TokensArgs::default();
        assert!(args.inputs.is_empty());
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(!args.stdout);
        assert!(!args.strict_identifiers);
    }

    #[test]
    fn test_tokens_command_name() {
        assert_eq!(TokensCommand::name(), "tokens");
        assert!(!TokensCommand::description().is_empty());
    }

    #[test]
    fn test_format_and_options_prefer_arguments() {
        let config = Config {
            output: OutputConfig {
                format: OutputFormat::Json,
                dir: None,
            },
            ..Config::default()
        };
        let command = TokensCommand::new(TokensArgs::default(), config.clone());
        assert_eq!(command.format(), OutputFormat::Json);
        assert!(!command.tokenizer_options().strict_identifiers);

        let args = TokensArgs {
            format: Some(OutputFormat::Text),
            strict_identifiers: true,
            ..TokensArgs::default()
        };
        let command = TokensCommand::new(args, config);
        assert_eq!(command.format(), OutputFormat::Text);
        assert!(command.tokenizer_options().strict_identifiers);
    }

    #[test]
    fn test_strict_identifiers_from_config() {
        let config = Config {
            lexer: LexerConfig {
                strict_identifiers: true,
            },
            ..Config::default()
        };
        let command = TokensCommand::new(TokensArgs::default(), config);
        assert!(command.tokenizer_options().strict_identifiers);
    }

    #[test]
    fn test_tokens_writes_xml_next_to_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_source(temp_dir.path(), "Main.jack", "class Main { }\n");

        let args = TokensArgs {
            inputs: vec![source],
            ..TokensArgs::default()
        };
        let summary = TokensCommand::new(args, Config::default()).run().unwrap();
        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.tokens, 4);

        let xml = std::fs::read_to_string(temp_dir.path().join("MainT.xml")).unwrap();
        assert!(xml.starts_with("<tokens>\n<keyword> class </keyword>\n"));
        assert!(xml.ends_with("</tokens>\n"));
    }

    #[test]
    fn test_tokens_writes_into_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        write_source(temp_dir.path(), "A.jack", "let a = 1;");
        write_source(temp_dir.path(), "B.jack", "let b = 2;");
        let out_dir = temp_dir.path().join("out");

        let args = TokensArgs {
            inputs: vec![temp_dir.path().to_path_buf()],
            format: Some(OutputFormat::Json),
            output: Some(out_dir.clone()),
            ..TokensArgs::default()
        };
        let summary = TokensCommand::new(args, Config::default()).run().unwrap();
        assert_eq!(summary.files_processed, 2);
        assert!(out_dir.join("A.tokens.json").exists());
        assert!(out_dir.join("B.tokens.json").exists());
    }

    #[test]
    fn test_tokens_counts_failures_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        write_source(temp_dir.path(), "Bad.jack", "let s = \"open;");
        write_source(temp_dir.path(), "Good.jack", "return;");

        let args = TokensArgs {
            inputs: vec![temp_dir.path().to_path_buf()],
            format: Some(OutputFormat::Text),
            ..TokensArgs::default()
        };
        let summary = TokensCommand::new(args, Config::default()).run().unwrap();
        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.files_failed, 1);
        assert!(temp_dir.path().join("Good.tokens").exists());
        assert!(!temp_dir.path().join("Bad.tokens").exists());
    }

    #[test]
    fn test_run_tokens_fails_when_any_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_source(temp_dir.path(), "Big.jack", "let x = 32768;");

        let args = TokensArgs {
            inputs: vec![source],
            ..TokensArgs::default()
        };
        let result = run_tokens(args, Config::default());
        assert!(matches!(result, Err(JacktError::CommandExecution(_))));
    }

    #[test]
    fn test_output_path_rejects_file_as_dir() {
        let temp_dir = TempDir::new().unwrap();
        let not_dir = write_source(temp_dir.path(), "plain", "");

        let args = TokensArgs {
            output: Some(not_dir),
            ..TokensArgs::default()
        };
        let command = TokensCommand::new(args, Config::default());
        let result = command.output_path(Path::new("Main.jack"), OutputFormat::Xml);
        assert!(matches!(result, Err(JacktError::Validation(_))));
    }

    #[test]
    fn test_no_inputs() {
        let result = TokensCommand::new(TokensArgs::default(), Config::default()).run();
        assert!(matches!(result, Err(JacktError::Validation(_))));
    }
}
