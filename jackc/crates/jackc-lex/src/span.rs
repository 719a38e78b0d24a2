//! Source location tracking.
//!
//! Every raw word and token remembers where it came from so that errors can
//! point at a line and column of the original source.
//!
//! # Examples
//!
//! ```
//! use jackc_lex::Span;
//!
//! let span = Span::new(3, 5, 2);
//! assert_eq!(span.line, 3);
//! assert_eq!(span.column, 5);
//! assert_eq!(span.end_column(), 7);
//! ```

use std::fmt;

/// Location of a piece of source text.
///
/// Lines and columns are 1-based. Columns count bytes, which equals
/// characters for the ASCII text the tokenizer is built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Column of the first byte (1-based)
    pub column: u32,
    /// Length in bytes
    pub len: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    /// * `len` - Length in bytes
    #[inline]
    pub const fn new(line: u32, column: u32, len: u32) -> Self {
        Self { line, column, len }
    }

    /// Returns a span covering `len` bytes starting `offset` bytes after
    /// the start of this one, on the same line.
    #[inline]
    pub fn sub(&self, offset: usize, len: usize) -> Self {
        Self::new(self.line, self.column + to_u32(offset), to_u32(len))
    }

    /// Column just past the last byte.
    #[inline]
    pub fn end_column(&self) -> u32 {
        self.column + self.len
    }

    /// Whether the span covers no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Saturating conversion for line and column arithmetic.
#[inline]
pub(crate) fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
