//! Parser for Fluent.
//!
//! Recursive descent over the lexer's token stream, with precedence climbing
//! for binary operators. Parsing stops at the first error; there is no
//! recovery.

mod cursor;
mod error;
mod grammar;

use cursor::Cursor;
use fluent_ir::{Stmt, Token, TokenKind};

pub use error::{ParseError, ParseErrorKind};

/// Parse a token stream into a program (a list of top-level statements).
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// `program := statement* EOF`
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.cursor.expect(TokenKind::Eof)?;
        Ok(statements)
    }
}

#[cfg(test)]
mod tests;
