//! Parse error types.

use fluent_ir::{Span, Token, TokenKind};

/// A fatal parse error at a specific token.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("ParseError: {kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Kind of the offending token.
    pub found: TokenKind,
    /// Text of the offending token (empty for layout tokens).
    pub text: String,
    pub span: Span,
}

impl ParseError {
    pub fn at(token: &Token, kind: ParseErrorKind) -> Self {
        ParseError {
            kind,
            found: token.kind,
            text: token.text.clone(),
            span: token.span,
        }
    }
}

/// What the parser expected.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: TokenKind },
    #[error("expected a pattern, found {found}")]
    InvalidPattern { found: TokenKind },
    #[error("only a bare identifier can be called")]
    CallOnNonIdentifier,
    #[error("invalid integer literal '{text}'")]
    InvalidNumber { text: String },
}
