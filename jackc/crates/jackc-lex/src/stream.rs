//! Token stream with a forward cursor.
//!
//! A [`TokenStream`] owns the fully classified token list of one source unit
//! and a cursor over it. The cursor starts before the first token; every
//! [`advance`](TokenStream::advance) moves it one token forward until the
//! stream is exhausted, after which `advance` keeps returning `false`.
//!
//! The typed accessors ([`keyword`](TokenStream::keyword),
//! [`symbol`](TokenStream::symbol), ...) read the current token and fail with
//! [`LexError::TypeMismatch`] when it is of another kind.
//!
//! # Example
//!
//! ```
//! use jackc_lex::{Keyword, TokenStream};
//!
//! let mut stream = TokenStream::new("let x = 10;").unwrap();
//! assert!(stream.advance());
//! assert_eq!(stream.keyword().unwrap(), Keyword::Let);
//! assert!(stream.advance());
//! assert_eq!(stream.identifier().unwrap(), "x");
//! assert!(stream.symbol().is_err());
//! ```

use std::slice;

use crate::error::{LexError, LexResult};
use crate::token::{Keyword, Token, TokenKind, TokenValue};
use crate::tokenizer::{Tokenizer, TokenizerOptions};

/// Cursor position within a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    BeforeFirst,
    At(usize),
    Exhausted,
}

/// Classified tokens of one source unit plus a forward cursor.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: Position,
}

impl TokenStream {
    /// Tokenizes `source` with default options.
    ///
    /// # Errors
    ///
    /// The first lexical error in the source; no partial stream is built.
    pub fn new(source: &str) -> LexResult<Self> {
        Self::with_options(source, TokenizerOptions::default())
    }

    /// Tokenizes `source` with the given options.
    pub fn with_options(source: &str, options: TokenizerOptions) -> LexResult<Self> {
        Tokenizer::with_options(options).tokenize_str(source)
    }

    /// Wraps an already classified token list. The cursor starts before the
    /// first token.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: Position::BeforeFirst,
        }
    }

    /// Moves to the next token. Returns whether a token is now current.
    ///
    /// Once the stream is exhausted this keeps returning `false`.
    pub fn advance(&mut self) -> bool {
        let next = match self.position {
            Position::BeforeFirst => 0,
            Position::At(i) => i + 1,
            Position::Exhausted => return false,
        };
        if next < self.tokens.len() {
            self.position = Position::At(next);
            true
        } else {
            self.position = Position::Exhausted;
            false
        }
    }

    /// The current token, if the cursor is on one.
    pub fn current(&self) -> Option<&Token> {
        match self.position {
            Position::At(i) => self.tokens.get(i),
            Position::BeforeFirst | Position::Exhausted => None,
        }
    }

    /// Kind of the current token.
    pub fn token_type(&self) -> Option<TokenKind> {
        self.current().map(Token::kind)
    }

    /// The token the next `advance` would move to, without moving.
    pub fn peek(&self) -> Option<&Token> {
        match self.position {
            Position::BeforeFirst => self.tokens.first(),
            Position::At(i) => self.tokens.get(i + 1),
            Position::Exhausted => None,
        }
    }

    /// Whether `advance` has run past the last token.
    pub fn is_exhausted(&self) -> bool {
        self.position == Position::Exhausted
    }

    /// Rewinds the cursor to before the first token.
    pub fn reset(&mut self) {
        self.position = Position::BeforeFirst;
    }

    /// The current keyword.
    ///
    /// # Errors
    ///
    /// [`LexError::TypeMismatch`] if the current token is not a keyword,
    /// [`LexError::NoCurrentToken`] if there is no current token.
    pub fn keyword(&self) -> LexResult<Keyword> {
        let token = self.require(TokenKind::Keyword)?;
        match token.value() {
            TokenValue::Keyword(kw) => Ok(*kw),
            _ => Err(mismatch(TokenKind::Keyword, token)),
        }
    }

    /// The current symbol character.
    pub fn symbol(&self) -> LexResult<char> {
        let token = self.require(TokenKind::Symbol)?;
        match token.value() {
            TokenValue::Symbol(c) => Ok(*c),
            _ => Err(mismatch(TokenKind::Symbol, token)),
        }
    }

    /// The current identifier.
    pub fn identifier(&self) -> LexResult<&str> {
        let token = self.require(TokenKind::Identifier)?;
        match token.value() {
            TokenValue::Identifier(name) => Ok(name),
            _ => Err(mismatch(TokenKind::Identifier, token)),
        }
    }

    /// The current integer constant, within `0..=32767`.
    pub fn int_val(&self) -> LexResult<i16> {
        let token = self.require(TokenKind::IntegerConstant)?;
        match token.value() {
            TokenValue::IntegerConstant(n) => Ok(*n),
            _ => Err(mismatch(TokenKind::IntegerConstant, token)),
        }
    }

    /// The current string constant, without quotes.
    pub fn string_val(&self) -> LexResult<&str> {
        let token = self.require(TokenKind::StringConstant)?;
        match token.value() {
            TokenValue::StringConstant(s) => Ok(s),
            _ => Err(mismatch(TokenKind::StringConstant, token)),
        }
    }

    fn require(&self, expected: TokenKind) -> LexResult<&Token> {
        self.current().ok_or(LexError::NoCurrentToken { expected })
    }

    /// Number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens, regardless of the cursor.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over all tokens without touching the cursor.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

fn mismatch(expected: TokenKind, token: &Token) -> LexError {
    LexError::TypeMismatch {
        expected,
        found: token.kind(),
        text: token.raw().to_string(),
        span: token.span(),
    }
}

impl<'s> IntoIterator for &'s TokenStream {
    type Item = &'s Token;
    type IntoIter = slice::Iter<'s, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
