//! Token listing formats.
//!
//! Renders a token sequence as the nand2tetris XML listing, a tab separated
//! text dump, or a JSON array.

use std::fmt::Write as _;
use std::path::Path;

use clap::ValueEnum;
use jackc_lex::{Token, TokenValue};
use serde::{Deserialize, Serialize};

use crate::error::{JacktError, Result};

/// Supported token listing formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// nand2tetris `XxxT.xml` listing
    #[default]
    Xml,
    /// `kind<TAB>value<TAB>line:col` lines
    Text,
    /// JSON array of token records
    Json,
}

impl OutputFormat {
    /// Output file name for a source file with the given stem.
    pub fn file_name(&self, stem: &str) -> String {
        match self {
            Self::Xml => format!("{}T.xml", stem),
            Self::Text => format!("{}.tokens", stem),
            Self::Json => format!("{}.tokens.json", stem),
        }
    }

    /// Output file name for `source`, or `None` if it has no usable stem.
    pub fn output_name(&self, source: &Path) -> Option<String> {
        source
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| self.file_name(stem))
    }

    /// Render `tokens` in this format.
    pub fn render(&self, tokens: &[Token]) -> Result<String> {
        match self {
            Self::Xml => Ok(render_xml(tokens)),
            Self::Text => Ok(render_text(tokens)),
            Self::Json => render_json(tokens),
        }
    }
}

/// Serialized shape of one token in the JSON listing.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: &'static str,
    pub text: &'a str,
    pub value: serde_json::Value,
    pub line: u32,
    pub column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let value = match token.value() {
            TokenValue::IntegerConstant(n) => serde_json::Value::from(*n),
            other => serde_json::Value::from(other.to_string()),
        };
        Self {
            kind: token.kind().xml_tag(),
            text: token.raw(),
            value,
            line: token.span().line,
            column: token.span().column,
        }
    }
}

/// Escape the characters the XML listing reserves.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_xml(tokens: &[Token]) -> String {
    let mut out = String::from("<tokens>\n");
    for token in tokens {
        let tag = token.kind().xml_tag();
        let _ = writeln!(
            out,
            "<{tag}> {} </{tag}>",
            escape_xml(&token.value().to_string())
        );
    }
    out.push_str("</tokens>\n");
    out
}

fn render_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            token.kind().xml_tag(),
            token.value(),
            token.span()
        );
    }
    out
}

fn render_json(tokens: &[Token]) -> Result<String> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    let mut out = serde_json::to_string_pretty(&records).map_err(JacktError::from)?;
    out.push('\n');
    Ok(out)
}
