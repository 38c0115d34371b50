//! Token cursor for navigating the token stream.

use crate::{ParseError, ParseErrorKind};
use fluent_ir::{Span, Token, TokenKind};

/// Cursor over a token slice.
///
/// Reading past the end yields a synthetic `Eof`, so grammar rules never
/// need bounds checks even on a stream the lexer did not produce.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(Span::DUMMY, |t| t.span);
        Cursor {
            tokens,
            pos: 0,
            eof: Token::structural(TokenKind::Eof, end),
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if index < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens.get(index).unwrap_or(&self.eof)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and return it.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind))
        }
    }

    /// Expect an identifier and return its name.
    pub fn expect_ident(&mut self) -> Result<String, ParseError> {
        self.expect(TokenKind::Ident).map(|t| t.text.clone())
    }

    #[cold]
    fn unexpected(&self, expected: TokenKind) -> ParseError {
        let token = self.current();
        ParseError::at(
            token,
            ParseErrorKind::UnexpectedToken {
                expected,
                found: token.kind,
            },
        )
    }
}
