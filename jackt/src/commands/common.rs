//! Common types and utilities for jackt commands.
//!
//! This module provides shared input discovery, tokenization and diagnostic
//! helpers used across all command implementations.

use std::path::{Path, PathBuf};

use jackc_lex::{LexError, TokenStream, TokenizerOptions};

use crate::error::{JacktError, Result};

/// Extension of Jack source files.
pub const JACK_EXTENSION: &str = "jack";

// ============================================================================
// Input Discovery
// ============================================================================

/// Expand command-line inputs into the list of source files to process.
///
/// Files are taken as given. Directories contribute every `.jack` file
/// directly inside them, sorted by name.
pub fn collect_sources(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if inputs.is_empty() {
        return Err(JacktError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }

    let mut sources = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = jack_files_in(input)?;
            if found.is_empty() {
                tracing::warn!(dir = %input.display(), "no .jack files found");
            }
            sources.extend(found);
        } else if input.is_file() {
            sources.push(input.clone());
        } else {
            return Err(JacktError::Validation(format!(
                "{} {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                input.display()
            )));
        }
    }
    Ok(sources)
}

/// Every `.jack` file directly inside `dir`, sorted.
fn jack_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == JACK_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ============================================================================
// Tokenization
// ============================================================================

/// Read and tokenize one source file.
///
/// IO failures and lexical errors are both reported through [`JacktError`];
/// lexical errors keep the path so [`describe_failure`] can point into it.
pub fn tokenize_file(path: &Path, options: TokenizerOptions) -> Result<TokenStream> {
    let source = read_source(path)?;

    let stream = TokenStream::with_options(&source, options).map_err(|source| JacktError::Lex {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), tokens = stream.len(), "tokenized");
    Ok(stream)
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        JacktError::FileOperation(format!(
            "{} {}: {}",
            error_messages::CANNOT_READ,
            path.display(),
            e
        ))
    })
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Format a lexical error as `path:line:column: error: message`, followed by
/// the offending source line and a caret under the error position when the
/// error carries a span.
pub fn render_diagnostic(path: &Path, source: &str, error: &LexError) -> String {
    let Some(span) = error.span() else {
        return format!("{}: error: {}", path.display(), error);
    };

    let mut out = format!(
        "{}:{}:{}: error: {}",
        path.display(),
        span.line,
        span.column,
        error
    );

    let line_text = source
        .lines()
        .nth((span.line as usize).saturating_sub(1))
        .map(|line| line.trim_end_matches('\r'));
    if let Some(line_text) = line_text {
        let prefix = line_text
            .get(..(span.column as usize).saturating_sub(1))
            .unwrap_or(line_text);
        let pad: String = prefix
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let marks = "^".repeat(span.len.max(1) as usize);
        out.push_str(&format!("\n  {}\n  {}{}", line_text, pad, marks));
    }
    out
}

/// Human-readable report for a file that failed to process.
///
/// Lexical errors are rendered with [`render_diagnostic`]; anything else is
/// reported as `path: error`.
pub fn describe_failure(path: &Path, error: &JacktError) -> String {
    match error {
        JacktError::Lex { path, source } => match std::fs::read_to_string(path) {
            Ok(text) => render_diagnostic(path, &text, source),
            Err(_) => error.to_string(),
        },
        _ => format!("{}: {}", path.display(), error),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when a source file cannot be read.
    pub const CANNOT_READ: &str = "Cannot read";

    /// Error when output path is not a directory.
    pub const OUTPUT_PATH_NOT_DIR: &str = "Output path is not a directory:";

    /// Error when file path is invalid.
    pub const INVALID_FILE_PATH: &str = "Invalid file path:";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed out of";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message templates.
///
/// These constants provide consistent output messages across all commands.
pub mod output_messages {
    /// Message when a listing is written.
    pub const WROTE_FILE: &str = "Wrote";

    /// Message when processing a file.
    pub const PROCESSING_FILE: &str = "Tokenizing";

    /// Message when tokenizing is completed.
    pub const COMPLETED: &str = "Completed in";
}
