//! Word splitting.
//!
//! Cuts a [`Fragment`] into raw words: quoted strings (quotes included),
//! single symbol characters, and the runs of other characters between
//! whitespace and symbols. String contents are opaque, so neither
//! whitespace nor symbols inside quotes split anything.

use crate::error::{LexError, LexResult};
use crate::normalize::Fragment;
use crate::span::Span;
use crate::token::is_symbol;

/// An unclassified word and its location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawWord<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// Splits `fragment` into raw words.
///
/// ```
/// use jackc_lex::normalize::fragments;
/// use jackc_lex::split::split_fragment;
///
/// let fragment = fragments(["do Output.printString(\"a b\");"]).next().unwrap();
/// let words: Vec<&str> = split_fragment(fragment)
///     .unwrap()
///     .into_iter()
///     .map(|w| w.text)
///     .collect();
/// assert_eq!(words, ["do", "Output", ".", "printString", "(", "\"a b\"", ")", ";"]);
/// ```
pub fn split_fragment(fragment: Fragment<'_>) -> LexResult<Vec<RawWord<'_>>> {
    let mut words = Vec::new();
    split_into(fragment, &mut words)?;
    Ok(words)
}

/// Splits `fragment` and appends the words to `out`.
///
/// On error nothing is guaranteed about what was appended; callers abandon
/// the whole source unit.
///
/// # Errors
///
/// [`LexError::UnterminatedString`] if a quote opened in this fragment is
/// still open at its end.
pub fn split_into<'a>(fragment: Fragment<'a>, out: &mut Vec<RawWord<'a>>) -> LexResult<()> {
    let text = fragment.text;
    let mut splitter = Splitter {
        fragment,
        out,
        segment_start: 0,
    };
    let mut in_string = false;

    for (i, c) in text.char_indices() {
        if c == '"' {
            if in_string {
                splitter.flush(i + 1);
            } else {
                splitter.flush(i);
                splitter.segment_start = i;
            }
            in_string = !in_string;
            continue;
        }

        if in_string {
            continue;
        }

        if is_word_separator(c) {
            splitter.flush(i);
            splitter.segment_start = i + 1;
        } else if is_symbol(c) {
            splitter.flush(i);
            splitter.flush(i + 1);
        }
    }

    if in_string {
        let start = splitter.segment_start;
        return Err(LexError::UnterminatedString {
            span: fragment.span.sub(start, text.len() - start),
        });
    }

    splitter.flush(text.len());
    Ok(())
}

/// Space, tab, LF, CR, FF and VT.
fn is_word_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

struct Splitter<'a, 'o> {
    fragment: Fragment<'a>,
    out: &'o mut Vec<RawWord<'a>>,
    segment_start: usize,
}

impl<'a, 'o> Splitter<'a, 'o> {
    /// Emits the pending segment up to `end` (exclusive), if non-empty, and
    /// starts the next segment at `end`.
    fn flush(&mut self, end: usize) {
        let start = self.segment_start;
        let text = self.fragment.text;
        if end > start {
            self.out.push(RawWord {
                text: &text[start..end],
                span: self.fragment.span.sub(start, end - start),
            });
        }
        self.segment_start = end;
    }
}
