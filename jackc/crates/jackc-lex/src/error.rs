//! Error types for jackc-lex
//!
//! Tokenization fails on the first error; there is no partial token stream.

use thiserror::Error;

use crate::span::Span;
use crate::token::TokenKind;

/// Largest integer constant the language accepts.
pub const MAX_INT_CONSTANT: i16 = i16::MAX;

/// Error type for tokenization and token access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was opened but not closed before the end of its line
    #[error("unterminated string literal starting at {span}")]
    UnterminatedString { span: Span },

    /// An integer constant outside `0..=32767`
    #[error("integer constant {text} at {span} is out of range (maximum is {max})", max = MAX_INT_CONSTANT)]
    IntegerOutOfRange { text: String, span: Span },

    /// A typed accessor was called on a token of another kind
    #[error("expected {expected} but current token is {found} `{text}` at {span}")]
    TypeMismatch {
        expected: TokenKind,
        found: TokenKind,
        text: String,
        span: Span,
    },

    /// The word splitter produced an empty word
    #[error("empty raw token at {span}")]
    EmptyRawToken { span: Span },

    /// A typed accessor was called before the first `advance` or after the end
    #[error("no current token (expected {expected})")]
    NoCurrentToken { expected: TokenKind },

    /// An identifier rejected by strict identifier checking
    #[error("invalid identifier `{text}` at {span}")]
    InvalidIdentifier { text: String, span: Span },
}

impl LexError {
    /// Source location of the error, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnterminatedString { span }
            | LexError::IntegerOutOfRange { span, .. }
            | LexError::TypeMismatch { span, .. }
            | LexError::EmptyRawToken { span }
            | LexError::InvalidIdentifier { span, .. } => Some(*span),
            LexError::NoCurrentToken { .. } => None,
        }
    }
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;
