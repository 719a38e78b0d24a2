//! Command trait and common types for the jackt CLI.
//!
//! This module defines the standard command trait that all commands
//! implement, and the summary they report when done.

use std::time::Duration;

use crate::config::Config;
use crate::error::{JacktError, Result};

use super::common::error_messages;

/// Standard command trait that all jackt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments and
    /// configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    ///
    /// Per-file failures are reported as they happen and counted in the
    /// returned summary; only failures that stop the whole run are errors.
    fn execute(&self) -> Result<CommandSummary>;

    /// Get the command name.
    fn name() -> &'static str;

    /// Get a short description of the command.
    fn description() -> &'static str;
}

/// What a command did, file by file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSummary {
    /// Files tokenized successfully.
    pub files_processed: usize,

    /// Files that could not be read or tokenized.
    pub files_failed: usize,

    /// Tokens produced across all successful files.
    pub tokens: usize,

    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl CommandSummary {
    /// Record a successfully tokenized file.
    pub fn record_success(&mut self, tokens: usize) {
        self.files_processed += 1;
        self.tokens += tokens;
    }

    /// Record a failed file.
    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }

    /// Turn a summary with failures into an error for the process exit code.
    pub fn into_result(self) -> Result<Self> {
        if self.files_failed > 0 {
            return Err(JacktError::CommandExecution(format!(
                "{} {} {}",
                self.files_failed,
                error_messages::FILES_FAILED,
                self.files_failed + self.files_processed
            )));
        }
        Ok(self)
    }
}
