//! jackc-lex - Tokenizer for the Jack Programming Language
//!
//! This crate turns the source text of one Jack compilation unit into a
//! stream of classified tokens for the parser.
//!
//! # Overview
//!
//! Tokenization runs as a one-way pipeline, once, over the whole unit:
//!
//! 1. [`normalize`] - strips comments and blank lines into trimmed fragments
//! 2. [`split`] - cuts each fragment into raw words, keeping strings whole
//! 3. [`classify`] - turns each raw word into a typed [`Token`]
//! 4. [`stream`] - wraps the tokens in a [`TokenStream`] with a cursor
//!
//! Any lexical error aborts the unit; there is no partial stream.
//!
//! # Example Usage
//!
//! ```
//! use jackc_lex::{Keyword, TokenKind, TokenStream};
//!
//! let mut stream = TokenStream::new("if (x < 10) { return true; }").unwrap();
//! assert_eq!(stream.len(), 11);
//!
//! stream.advance();
//! assert_eq!(stream.keyword().unwrap(), Keyword::If);
//! stream.advance();
//! assert_eq!(stream.token_type(), Some(TokenKind::Symbol));
//! ```
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `class`, `constructor`, `function`, `method`, `field`, `static`, `var`,
//! `int`, `char`, `boolean`, `void`, `true`, `false`, `null`, `this`, `let`,
//! `do`, `if`, `else`, `while`, `return`
//!
//! ## Symbols
//!
//! `{ } ( ) [ ] . , ; + - * / & | < > = ~`
//!
//! ## Constants
//!
//! - **Integer**: decimal, `0` to `32767`
//! - **String**: `"hello"`, no escapes, may not span lines
//!
//! ## Identifiers
//!
//! Any other word. With [`TokenizerOptions::strict_identifiers`] they must
//! match `[A-Za-z_][A-Za-z0-9_]*`.
//!
//! ## Comments
//!
//! `// to end of line`, `/* block */` and `/** doc */`, the latter two
//! possibly spanning lines. Comment markers inside strings are text.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod error;
pub mod normalize;
pub mod span;
pub mod split;
pub mod stream;
pub mod token;
pub mod tokenizer;

mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, LexResult, MAX_INT_CONSTANT};
pub use span::Span;
pub use stream::TokenStream;
pub use token::{is_symbol, Keyword, Token, TokenKind, TokenValue, SYMBOLS};
pub use tokenizer::{Tokenizer, TokenizerOptions};
