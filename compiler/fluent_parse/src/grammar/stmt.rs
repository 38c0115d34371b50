//! Statements and blocks.

use crate::{ParseError, Parser};
use fluent_ir::{FnDecl, Param, Stmt, StmtKind, TokenKind};
use std::rc::Rc;
use tracing::trace;

impl Parser<'_> {
    /// `statement := (let | fnDecl | return | exprStmt) NEWLINE?`
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let span = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let()?,
            TokenKind::Fn => StmtKind::FnDecl(Rc::new(self.parse_fn_decl()?)),
            TokenKind::Return => {
                self.cursor.advance();
                StmtKind::Return(self.parse_expr()?)
            }
            _ => StmtKind::Expr(self.parse_expr()?),
        };
        self.cursor.eat(TokenKind::Newline);
        trace!(%span, "statement");
        Ok(Stmt::new(kind, span))
    }

    /// `let := "let" IDENT [":" type] "=" expr`
    fn parse_let(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(TokenKind::Let)?;
        let name = self.cursor.expect_ident()?;
        let ty = if self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.cursor.expect(TokenKind::Assign)?;
        let value = self.parse_expr()?;
        Ok(StmtKind::Let { name, ty, value })
    }

    /// `fnDecl := "fn" IDENT "(" [param ("," param)*] ")" ["->" type] NEWLINE block`
    fn parse_fn_decl(&mut self) -> Result<FnDecl, ParseError> {
        let span = self.cursor.expect(TokenKind::Fn)?.span;
        let name = self.cursor.expect_ident()?;

        self.cursor.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        let return_type = if self.cursor.eat(TokenKind::Arrow) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.cursor.expect(TokenKind::Newline)?;
        let body = self.parse_block()?;

        Ok(FnDecl {
            name,
            params,
            return_type,
            body,
            span,
        })
    }

    /// `param := IDENT ":" type`
    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let span = self.cursor.current_span();
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(Param { name, ty, span })
    }

    /// `block := INDENT statement* DEDENT`
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect(TokenKind::Indent)?;
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::Dedent) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.cursor.expect(TokenKind::Dedent)?;
        Ok(statements)
    }
}
