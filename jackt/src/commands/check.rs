//! Check command implementation.
//!
//! Tokenizes Jack source files without writing anything, printing a token
//! count per file and a diagnostic for each file that fails.

use std::path::PathBuf;
use std::time::Instant;

use jackc_lex::TokenizerOptions;

use crate::commands::common::{collect_sources, describe_failure, output_messages, tokenize_file};
use crate::commands::traits::{Command, CommandSummary};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files or directories of source files.
    pub inputs: Vec<PathBuf>,
    /// Reject identifiers outside `[A-Za-z_][A-Za-z0-9_]*`.
    pub strict_identifiers: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Effective tokenizer options.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        let mut options = self.config.lexer.tokenizer_options();
        options.strict_identifiers |= self.args.strict_identifiers;
        options
    }

    /// Execute the command.
    pub fn run(&self) -> Result<CommandSummary> {
        let start_time = Instant::now();
        let sources = collect_sources(&self.args.inputs)?;
        let options = self.tokenizer_options();

        let mut summary = CommandSummary::default();
        for source in &sources {
            match tokenize_file(source, options) {
                Ok(stream) => {
                    println!("{}: {} tokens", source.display(), stream.len());
                    summary.record_success(stream.len());
                }
                Err(e) => {
                    summary.record_failure();
                    eprintln!("{}", describe_failure(source, &e));
                }
            }
        }

        summary.elapsed = start_time.elapsed();
        if self.args.verbose || self.config.verbose {
            eprintln!(
                "{} {:.2}s",
                output_messages::COMPLETED,
                summary.elapsed.as_secs_f64()
            );
        }
        Ok(summary)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<CommandSummary> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }

    fn description() -> &'static str {
        "Tokenize Jack source files and report lexical errors"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    tracing::debug!(command = CheckCommand::name(), "{}", CheckCommand::description());
    let command = CheckCommand::new(args, config);
    command.execute()?.into_result()?;
    Ok(())
}
