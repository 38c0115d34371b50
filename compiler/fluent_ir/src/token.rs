//! Token types produced by the lexer.

use crate::Span;
use std::fmt;

/// A token with its literal text and position.
///
/// `text` holds the lexeme: identifier and keyword spelling, integer digits,
/// or string contents without the surrounding quotes. Structural tokens
/// (`Indent`, `Dedent`, `Newline`, `Eof`) carry empty text.
#[derive(Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// A token with no lexeme (layout tokens and end of input).
    pub fn structural(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: String::new(),
            span,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{:?} @ {:?}", self.kind, self.span)
        } else {
            write!(f, "{:?}({:?}) @ {:?}", self.kind, self.text, self.span)
        }
    }
}

/// Token kinds for Fluent.
///
/// Payload-free so kinds are `Copy` and cheap to compare; the lexeme lives on
/// [`Token::text`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Layout ===
    Indent,
    Dedent,
    Newline,
    Eof,

    // === Keywords ===
    Fn,
    Let,
    Return,
    Match,
    If,
    Else,
    Print,

    // === Literals ===
    /// Integer literal: 42
    Number,
    /// String literal: "hello" (text is the contents)
    String,
    True,
    False,

    // === Identifiers ===
    Ident,

    // === Word operators ===
    And,
    Or,
    Not,

    // === Symbols ===
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Assign,   // =
    Arrow,    // ->
    FatArrow, // =>
    DotDot,   // ..
    EqEq,     // ==
    NotEq,    // !=
    Lt,       // <
    Gt,       // >
    LtEq,     // <=
    GtEq,     // >=
    Colon,    // :
    Comma,    // ,
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
}

impl TokenKind {
    /// Human-readable description used in parser diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
            TokenKind::Fn => "'fn'",
            TokenKind::Let => "'let'",
            TokenKind::Return => "'return'",
            TokenKind::Match => "'match'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::Print => "'print'",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Ident => "identifier",
            TokenKind::And => "'and'",
            TokenKind::Or => "'or'",
            TokenKind::Not => "'not'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Assign => "'='",
            TokenKind::Arrow => "'->'",
            TokenKind::FatArrow => "'=>'",
            TokenKind::DotDot => "'..'",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
        }
    }

    /// Layout tokens synthesized from indentation and line ends.
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
