//! Source positions.

use std::fmt;

/// A position in the source text.
///
/// Both fields are 0-based. `column` is a byte offset within the line.
/// `Display` renders the human-facing 1-based form `line:column`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Position used for nodes built outside the parser.
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Span { line, column }
    }

    /// Build a span from `usize` coordinates, saturating at `u32::MAX`.
    #[inline]
    pub fn from_usize(line: usize, column: usize) -> Self {
        Span {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            column: u32::try_from(column).unwrap_or(u32::MAX),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.line.saturating_add(1),
            self.column.saturating_add(1)
        )
    }
}
