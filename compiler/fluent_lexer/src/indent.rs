//! Indentation stack.
//!
//! Tracks the open block widths. The stack always starts with width 0 and
//! never pops below it, so every INDENT is matched by exactly one DEDENT.

use crate::LexErrorKind;

/// Number of spaces one block level adds.
pub const INDENT_WIDTH: usize = 2;

/// Result of measuring one line's leading whitespace.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IndentChange {
    Same,
    Indent,
    /// Number of levels closed.
    Dedent(usize),
}

#[derive(Debug)]
pub struct IndentStack {
    widths: Vec<usize>,
}

impl IndentStack {
    pub fn new() -> Self {
        IndentStack { widths: vec![0] }
    }

    /// Width of the innermost open block.
    #[inline]
    pub fn current(&self) -> usize {
        self.widths.last().copied().unwrap_or(0)
    }

    /// Number of open levels above the base.
    #[inline]
    pub fn depth(&self) -> usize {
        self.widths.len() - 1
    }

    /// Update the stack for a line indented by `width` spaces.
    pub fn measure(&mut self, width: usize) -> Result<IndentChange, LexErrorKind> {
        let current = self.current();
        if width > current {
            let expected = current + INDENT_WIDTH;
            if width != expected {
                return Err(LexErrorKind::BadIndentStep {
                    expected,
                    found: width,
                });
            }
            self.widths.push(width);
            return Ok(IndentChange::Indent);
        }

        let mut closed = 0;
        while width < self.current() {
            self.widths.pop();
            closed += 1;
        }
        if width != self.current() {
            return Err(LexErrorKind::UnalignedDedent { found: width });
        }
        Ok(if closed == 0 {
            IndentChange::Same
        } else {
            IndentChange::Dedent(closed)
        })
    }

    /// Close every open level, returning how many were closed.
    pub fn close_all(&mut self) -> usize {
        let open = self.depth();
        self.widths.truncate(1);
        open
    }
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}
