//! The tokenizer pipeline.
//!
//! Lines flow through the normalizer, the word splitter and the classifier,
//! in that order, and come out as a complete token list. The whole source
//! unit is processed up front; the first error aborts it.

use tracing::{debug, trace};

use crate::classify::classify;
use crate::error::LexResult;
use crate::normalize::fragments;
use crate::split::split_into;
use crate::stream::TokenStream;
use crate::token::Token;

/// Knobs for classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Reject identifiers that do not match `[A-Za-z_][A-Za-z0-9_]*`
    /// instead of accepting any leftover word.
    pub strict_identifiers: bool,
}

/// Runs the normalize → split → classify pipeline.
///
/// # Example
///
/// ```
/// use jackc_lex::{Keyword, Tokenizer, TokenValue};
///
/// let tokens = Tokenizer::new().tokenize("let x = 10;".lines()).unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].value(), &TokenValue::Keyword(Keyword::Let));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

impl Tokenizer {
    /// Creates a tokenizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with the given options.
    pub fn with_options(options: TokenizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Tokenizes a whole source unit given as lines.
    ///
    /// # Arguments
    ///
    /// * `lines` - the source lines in file order, without terminators
    ///
    /// # Errors
    ///
    /// The first [`LexError`](crate::LexError) met in any line.
    pub fn tokenize<'a, I>(&self, lines: I) -> LexResult<Vec<Token>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tokens = Vec::new();
        let mut words = Vec::new();
        let mut fragments = fragments(lines);

        for fragment in &mut fragments {
            words.clear();
            split_into(fragment, &mut words)?;
            for word in words.drain(..) {
                let token = classify(word, &self.options)?;
                trace!(kind = %token.kind(), raw = token.raw(), at = %token.span(), "token");
                tokens.push(token);
            }
        }

        if fragments.in_block_comment() {
            debug!("source unit ends inside a block comment");
        }
        debug!(
            lines = fragments.line_count(),
            tokens = tokens.len(),
            "tokenized source unit"
        );
        Ok(tokens)
    }

    /// Tokenizes `source` into a ready-to-use stream.
    pub fn tokenize_str(&self, source: &str) -> LexResult<TokenStream> {
        self.tokenize(source.lines()).map(TokenStream::from_tokens)
    }
}
