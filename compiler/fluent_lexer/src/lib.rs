//! Lexer for Fluent.
//!
//! Turns source text into a flat token stream with layout tokens:
//! - `Indent` / `Dedent` from two-space indentation changes
//! - `Newline` after every non-blank line
//! - trailing `Dedent`s for open blocks, then `Eof`
//!
//! Each line is handled in two steps: the indentation prefix is measured
//! against an [`IndentStack`](indent::IndentStack), then the rest of the line
//! is scanned with logos. The first problem aborts lexing with a [`LexError`].

mod indent;
mod lex_error;
mod raw_token;

use fluent_ir::{Span, Token, TokenKind};
use logos::Logos;
use tracing::trace;

pub use indent::{IndentChange, IndentStack, INDENT_WIDTH};
pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Lex a complete source text.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new().run(source)?;
    tracing::debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

struct Lexer {
    tokens: Vec<Token>,
    indents: IndentStack,
}

impl Lexer {
    fn new() -> Self {
        Lexer {
            tokens: Vec::new(),
            indents: IndentStack::new(),
        }
    }

    fn run(mut self, source: &str) -> Result<Vec<Token>, LexError> {
        let mut line_count = 0;
        for (line_no, line) in source.lines().enumerate() {
            line_count = line_no + 1;
            self.line(line_no, line)?;
        }

        let end = Span::from_usize(line_count, 0);
        for _ in 0..self.indents.close_all() {
            self.push_structural(TokenKind::Dedent, end);
        }
        self.push_structural(TokenKind::Eof, end);
        Ok(self.tokens)
    }

    fn line(&mut self, line_no: usize, line: &str) -> Result<(), LexError> {
        if let Some(col) = line.find('\t') {
            return Err(LexError::new(
                LexErrorKind::TabCharacter,
                Span::from_usize(line_no, col),
            ));
        }
        if line.trim().is_empty() {
            return Ok(());
        }

        let width = line.len() - line.trim_start_matches(' ').len();
        let start = Span::from_usize(line_no, width);
        match self
            .indents
            .measure(width)
            .map_err(|kind| LexError::new(kind, start))?
        {
            IndentChange::Same => {}
            IndentChange::Indent => {
                trace!(line = line_no, width, "indent");
                self.push_structural(TokenKind::Indent, start);
            }
            IndentChange::Dedent(levels) => {
                trace!(line = line_no, width, levels, "dedent");
                for _ in 0..levels {
                    self.push_structural(TokenKind::Dedent, start);
                }
            }
        }

        self.scan(line_no, width, &line[width..])?;
        self.push_structural(TokenKind::Newline, Span::from_usize(line_no, line.len()));
        Ok(())
    }

    /// Scan the body of a line; `offset` is the column where `body` begins.
    fn scan(&mut self, line_no: usize, offset: usize, body: &str) -> Result<(), LexError> {
        let mut lex = RawToken::lexer(body);
        while let Some(result) = lex.next() {
            let range = lex.span();
            let span = Span::from_usize(line_no, offset + range.start);
            let slice = lex.slice();

            let raw = result.map_err(|()| {
                let kind = match body[range.start..].chars().next() {
                    Some('"') => LexErrorKind::UnterminatedString,
                    Some(ch) => LexErrorKind::UnexpectedCharacter { ch },
                    None => LexErrorKind::UnterminatedString,
                };
                LexError::new(kind, span)
            })?;
            let kind = raw
                .kind()
                .map_err(|op| LexError::new(LexErrorKind::ReservedOperator { op }, span))?;

            let text = match kind {
                TokenKind::String => &slice[1..slice.len() - 1],
                TokenKind::Number => {
                    if slice.parse::<i64>().is_err() {
                        return Err(LexError::new(
                            LexErrorKind::IntegerTooLarge {
                                text: slice.to_string(),
                            },
                            span,
                        ));
                    }
                    slice
                }
                _ => slice,
            };
            self.tokens.push(Token::new(kind, text, span));
        }
        Ok(())
    }

    fn push_structural(&mut self, kind: TokenKind, span: Span) {
        self.tokens.push(Token::structural(kind, span));
    }
}
