//! Line normalization.
//!
//! Turns raw source lines into comment-free, trimmed [`Fragment`]s. Comment
//! markers are only recognized outside string literals, so `"http://x"`
//! survives intact, and a lone `/` is always the division symbol.
//!
//! Block comments (`/* ... */`, `/** ... */`) are elided on a best-effort
//! basis, including across lines. They do not nest: the first `*/` closes
//! the comment.

use std::collections::VecDeque;

use crate::span::{to_u32, Span};

/// One trimmed, comment-free piece of a source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The code text. Never empty, never starts or ends with whitespace.
    pub text: &'a str,
    /// Where `text` sits in the original source.
    pub span: Span,
}

/// Comment stripper carrying block-comment state from one line to the next.
#[derive(Debug, Default, Clone)]
pub struct Normalizer {
    in_block_comment: bool,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an unclosed `/*` is pending from a previous line.
    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Strips comments from `line` and appends the surviving fragments to
    /// `out`. Blank lines and `//` comment lines produce nothing.
    ///
    /// # Arguments
    ///
    /// * `line_no` - 1-based line number of `line`
    /// * `line` - the raw line, without its terminator
    /// * `out` - receives the fragments in source order
    pub fn normalize_line<'a, E>(&mut self, line_no: u32, line: &'a str, out: &mut E)
    where
        E: Extend<Fragment<'a>>,
    {
        let trimmed = line.trim();
        if !self.in_block_comment && (trimmed.is_empty() || trimmed.starts_with("//")) {
            return;
        }

        let base = line.len() - line.trim_start().len();
        let bytes = trimmed.as_bytes();
        let mut segment_start = 0;
        let mut in_string = false;
        let mut i = 0;

        while i < bytes.len() {
            if self.in_block_comment {
                match trimmed[i..].find("*/") {
                    Some(end) => {
                        self.in_block_comment = false;
                        i += end + 2;
                        segment_start = i;
                        continue;
                    },
                    None => {
                        segment_start = bytes.len();
                        break;
                    },
                }
            }

            let b = bytes[i];
            if in_string {
                if b == b'"' {
                    in_string = false;
                }
                i += 1;
                continue;
            }

            match (b, bytes.get(i + 1).copied()) {
                (b'"', _) => in_string = true,
                (b'/', Some(b'/')) => {
                    emit(trimmed, base, segment_start, i, line_no, out);
                    return;
                },
                (b'/', Some(b'*')) => {
                    emit(trimmed, base, segment_start, i, line_no, out);
                    self.in_block_comment = true;
                    i += 2;
                    continue;
                },
                _ => {},
            }
            i += 1;
        }

        emit(trimmed, base, segment_start, bytes.len(), line_no, out);
    }
}

/// Pushes `trimmed[start..end]` as a fragment if anything but whitespace is
/// left. `base` is the offset of `trimmed` within the raw line.
fn emit<'a, E>(trimmed: &'a str, base: usize, start: usize, end: usize, line_no: u32, out: &mut E)
where
    E: Extend<Fragment<'a>>,
{
    if start >= end {
        return;
    }
    let piece = &trimmed[start..end];
    let text = piece.trim();
    if text.is_empty() {
        return;
    }
    let lead = piece.len() - piece.trim_start().len();
    let column = to_u32(base + start + lead + 1);
    out.extend(Some(Fragment {
        text,
        span: Span::new(line_no, column, to_u32(text.len())),
    }));
}

/// Lazy fragment sequence over source lines, see [`fragments`].
#[derive(Debug)]
pub struct Fragments<'a, I> {
    lines: I,
    line_no: u32,
    normalizer: Normalizer,
    pending: VecDeque<Fragment<'a>>,
}

impl<'a, I> Fragments<'a, I> {
    /// Whether the input ended inside a block comment.
    pub fn in_block_comment(&self) -> bool {
        self.normalizer.in_block_comment()
    }

    /// Number of raw lines consumed so far.
    pub fn line_count(&self) -> u32 {
        self.line_no
    }
}

impl<'a, I> Iterator for Fragments<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(fragment);
            }
            let line = self.lines.next()?;
            self.line_no += 1;
            self.normalizer
                .normalize_line(self.line_no, line, &mut self.pending);
        }
    }
}

/// Normalizes `lines` lazily, numbering them from 1.
///
/// ```
/// use jackc_lex::normalize::fragments;
///
/// let source = "// header\nlet x = 1; // trailing\n\n  do f();";
/// let texts: Vec<&str> = fragments(source.lines()).map(|f| f.text).collect();
/// assert_eq!(texts, ["let x = 1;", "do f();"]);
/// ```
pub fn fragments<'a, I>(lines: I) -> Fragments<'a, I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    Fragments {
        lines: lines.into_iter(),
        line_no: 0,
        normalizer: Normalizer::new(),
        pending: VecDeque::new(),
    }
}
