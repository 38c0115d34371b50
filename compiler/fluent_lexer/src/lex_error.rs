//! Lexer error types.
//!
//! Every lexer error is fatal: lexing stops at the first one. The `span`
//! points at the offending character (or the first non-space column for
//! indentation errors).

use fluent_ir::Span;

/// A lexer error with its location.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("LexError: {kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    /// HOW to fix it, when there is an obvious answer.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::TabCharacter => Some("indent with two spaces per level"),
            LexErrorKind::BadIndentStep { .. } => {
                Some("each nested block is indented by exactly two spaces")
            }
            LexErrorKind::UnalignedDedent { .. } => {
                Some("dedent back to the column of an enclosing block")
            }
            LexErrorKind::UnterminatedString => Some("add a closing '\"' on the same line"),
            LexErrorKind::ReservedOperator { .. }
            | LexErrorKind::UnexpectedCharacter { .. }
            | LexErrorKind::IntegerTooLarge { .. } => None,
        }
    }
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    /// A tab appeared anywhere in a line.
    #[error("tab characters are not allowed")]
    TabCharacter,
    /// Indentation grew by something other than one level.
    #[error("bad indentation: expected {expected} spaces, found {found}")]
    BadIndentStep { expected: usize, found: usize },
    /// Indentation shrank to a width no enclosing block uses.
    #[error("dedent to column {found} does not match any enclosing block")]
    UnalignedDedent { found: usize },
    /// Missing closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `>>` and `>>>` are reserved and rejected.
    #[error("operator '{op}' is not supported")]
    ReservedOperator { op: &'static str },
    /// Any character that starts no token.
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char },
    /// Integer literal does not fit in a signed 64-bit integer.
    #[error("integer literal '{text}' is too large")]
    IntegerTooLarge { text: String },
}
