//! Error handling module for the jackt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use jackc_lex::LexError;
use thiserror::Error;

/// Main error type for the jackt CLI application.
#[derive(Error, Debug)]
pub enum JacktError {
    /// Error when the configuration cannot be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a source file fails to tokenize.
    #[error("{}: {source}", path.display())]
    Lex {
        /// The offending source file.
        path: PathBuf,
        /// The first lexical error in it.
        #[source]
        source: LexError,
    },

    /// Error when a command finishes with failed inputs.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JacktError.
pub type Result<T> = std::result::Result<T, JacktError>;
