//! Token classification.
//!
//! Decides the kind of a raw word and decodes its value. The checks run in a
//! fixed order and the first match wins:
//!
//! 1. keyword (exact spelling)
//! 2. symbol (a single symbol character)
//! 3. string constant (leading `"`)
//! 4. integer constant (all decimal digits, at most 32767)
//! 5. identifier (everything else)
//!
//! Classification depends on nothing but the word itself.

use crate::error::{LexError, LexResult, MAX_INT_CONSTANT};
use crate::span::Span;
use crate::split::RawWord;
use crate::token::{is_symbol, Keyword, Token, TokenValue};
use crate::tokenizer::TokenizerOptions;

/// Classifies a raw word into a token.
///
/// ```
/// use jackc_lex::classify::classify;
/// use jackc_lex::split::RawWord;
/// use jackc_lex::{Span, TokenKind, TokenizerOptions};
///
/// let word = RawWord { text: "while", span: Span::new(1, 1, 5) };
/// let token = classify(word, &TokenizerOptions::default()).unwrap();
/// assert_eq!(token.kind(), TokenKind::Keyword);
/// ```
pub fn classify(word: RawWord<'_>, options: &TokenizerOptions) -> LexResult<Token> {
    let value = classify_value(word.text, word.span, options)?;
    Ok(Token::new(value, word.text, word.span))
}

/// Decodes `text` into a value; `span` is only used for errors.
///
/// # Errors
///
/// - [`LexError::EmptyRawToken`] for an empty word
/// - [`LexError::IntegerOutOfRange`] for digit strings above 32767
/// - [`LexError::InvalidIdentifier`] for malformed identifiers when
///   `options.strict_identifiers` is set
pub fn classify_value(text: &str, span: Span, options: &TokenizerOptions) -> LexResult<TokenValue> {
    let mut chars = text.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Err(LexError::EmptyRawToken { span }),
    };

    if let Some(keyword) = Keyword::from_str(text) {
        return Ok(TokenValue::Keyword(keyword));
    }

    if chars.as_str().is_empty() && is_symbol(first) {
        return Ok(TokenValue::Symbol(first));
    }

    if first == '"' {
        return Ok(TokenValue::StringConstant(string_payload(text).to_string()));
    }

    if text.bytes().all(|b| b.is_ascii_digit()) {
        return parse_integer(text, span).map(TokenValue::IntegerConstant);
    }

    if options.strict_identifiers && !is_valid_identifier(text) {
        return Err(LexError::InvalidIdentifier {
            text: text.to_string(),
            span,
        });
    }

    Ok(TokenValue::Identifier(text.to_string()))
}

/// Strips the leading quote and, when present, the trailing one.
fn string_payload(text: &str) -> &str {
    let inner = &text[1..];
    inner.strip_suffix('"').unwrap_or(inner)
}

/// Parses a decimal digit string, rejecting anything above 32767.
fn parse_integer(digits: &str, span: Span) -> LexResult<i16> {
    // Overflowing i16 is the same error as exceeding the language maximum.
    match digits.parse::<i16>() {
        Ok(n) if (0..=MAX_INT_CONSTANT).contains(&n) => Ok(n),
        _ => Err(LexError::IntegerOutOfRange {
            text: digits.to_string(),
            span,
        }),
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false,
    }
}
