//! Token type definitions.
//!
//! A [`Token`] pairs the raw text the splitter produced with its decoded
//! [`TokenValue`]. The [`TokenKind`] is derived from the value, so a token can
//! never claim one kind while holding the value of another.

use std::fmt;

use crate::span::Span;

/// Symbol characters of the language, in grammar order.
pub const SYMBOLS: [char; 19] = [
    '{', '}', '(', ')', '[', ']', '.', ',', ';', '+', '-', '*', '/', '&', '|', '<', '>', '=', '~',
];

/// Returns true if `c` is one of the language's symbol characters.
///
/// ```
/// use jackc_lex::is_symbol;
///
/// assert!(is_symbol('{'));
/// assert!(is_symbol('~'));
/// assert!(!is_symbol('%'));
/// ```
#[inline]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// The five token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word
    Keyword,
    /// Single punctuation or operator character
    Symbol,
    /// Name of a class, subroutine or variable
    Identifier,
    /// Decimal integer literal
    IntegerConstant,
    /// Double-quoted string literal
    StringConstant,
}

impl TokenKind {
    /// Element name used in token XML listings.
    pub fn xml_tag(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConstant => "integer constant",
            TokenKind::StringConstant => "string constant",
        };
        f.write_str(name)
    }
}

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Class,
    Constructor,
    Function,
    Method,
    Field,
    Static,
    Var,
    Int,
    Char,
    Boolean,
    Void,
    True,
    False,
    Null,
    This,
    Let,
    Do,
    If,
    Else,
    While,
    Return,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 21] = [
        Keyword::Class,
        Keyword::Constructor,
        Keyword::Function,
        Keyword::Method,
        Keyword::Field,
        Keyword::Static,
        Keyword::Var,
        Keyword::Int,
        Keyword::Char,
        Keyword::Boolean,
        Keyword::Void,
        Keyword::True,
        Keyword::False,
        Keyword::Null,
        Keyword::This,
        Keyword::Let,
        Keyword::Do,
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::Return,
    ];

    /// Looks up the keyword spelled exactly `text`.
    ///
    /// ```
    /// use jackc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_str("while"), Some(Keyword::While));
    /// assert_eq!(Keyword::from_str("While"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Option<Self> {
        let keyword = match text {
            "class" => Keyword::Class,
            "constructor" => Keyword::Constructor,
            "function" => Keyword::Function,
            "method" => Keyword::Method,
            "field" => Keyword::Field,
            "static" => Keyword::Static,
            "var" => Keyword::Var,
            "int" => Keyword::Int,
            "char" => Keyword::Char,
            "boolean" => Keyword::Boolean,
            "void" => Keyword::Void,
            "true" => Keyword::True,
            "false" => Keyword::False,
            "null" => Keyword::Null,
            "this" => Keyword::This,
            "let" => Keyword::Let,
            "do" => Keyword::Do,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "while" => Keyword::While,
            "return" => Keyword::Return,
            _ => return None,
        };
        Some(keyword)
    }

    /// Source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Class => "class",
            Keyword::Constructor => "constructor",
            Keyword::Function => "function",
            Keyword::Method => "method",
            Keyword::Field => "field",
            Keyword::Static => "static",
            Keyword::Var => "var",
            Keyword::Int => "int",
            Keyword::Char => "char",
            Keyword::Boolean => "boolean",
            Keyword::Void => "void",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::This => "this",
            Keyword::Let => "let",
            Keyword::Do => "do",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Return => "return",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded value of a token. The variant determines the token's kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    Keyword(Keyword),
    Symbol(char),
    Identifier(String),
    /// Always within `0..=32767`
    IntegerConstant(i16),
    /// String contents without the surrounding quotes
    StringConstant(String),
}

impl TokenValue {
    /// Kind corresponding to this value.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Keyword(_) => TokenKind::Keyword,
            TokenValue::Symbol(_) => TokenKind::Symbol,
            TokenValue::Identifier(_) => TokenKind::Identifier,
            TokenValue::IntegerConstant(_) => TokenKind::IntegerConstant,
            TokenValue::StringConstant(_) => TokenKind::StringConstant,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Keyword(kw) => write!(f, "{}", kw),
            TokenValue::Symbol(c) => write!(f, "{}", c),
            TokenValue::Identifier(name) => f.write_str(name),
            TokenValue::IntegerConstant(n) => write!(f, "{}", n),
            TokenValue::StringConstant(s) => f.write_str(s),
        }
    }
}

/// A classified token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    value: TokenValue,
    raw: String,
    span: Span,
}

impl Token {
    /// Creates a token. Callers outside the classifier are expected to pass
    /// a `raw` text that decodes to `value`.
    pub fn new(value: TokenValue, raw: impl Into<String>, span: Span) -> Self {
        Self {
            value,
            raw: raw.into(),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// The exact source text of the token, quotes included for strings.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn into_value(self) -> TokenValue {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_roundtrip_spelling() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(Keyword::from_str("Class"), None);
        assert_eq!(Keyword::from_str("RETURN"), None);
        assert_eq!(Keyword::from_str(""), None);
    }

    #[test]
    fn test_symbol_set() {
        for c in "{}()[].,;+-*/&|<>=~".chars() {
            assert!(is_symbol(c), "{c} should be a symbol");
        }
        for c in ['%', '!', '^', ':', '"', '_', ' ', 'a', '0'] {
            assert!(!is_symbol(c), "{c} should not be a symbol");
        }
    }

    #[test]
    fn test_kind_follows_value() {
        let token = Token::new(TokenValue::IntegerConstant(7), "7", Span::new(1, 1, 1));
        assert_eq!(token.kind(), TokenKind::IntegerConstant);
        assert_eq!(token.raw(), "7");

        let token = Token::new(
            TokenValue::StringConstant("hi".to_string()),
            "\"hi\"",
            Span::new(1, 1, 4),
        );
        assert_eq!(token.kind(), TokenKind::StringConstant);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenValue::Keyword(Keyword::Let), "let", Span::new(1, 1, 3));
        assert_eq!(token.to_string(), "keyword(let)");
        let token = Token::new(TokenValue::Symbol(';'), ";", Span::new(1, 4, 1));
        assert_eq!(token.to_string(), "symbol(;)");
    }

    #[test]
    fn test_xml_tags() {
        assert_eq!(TokenKind::IntegerConstant.xml_tag(), "integerConstant");
        assert_eq!(TokenKind::StringConstant.xml_tag(), "stringConstant");
        assert_eq!(TokenKind::Keyword.xml_tag(), "keyword");
    }
}
