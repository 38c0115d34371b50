//! `if` and `match` expressions.

use crate::{ParseError, ParseErrorKind, Parser};
use fluent_ir::{Expr, ExprKind, MatchArm, Pattern, TokenKind};

impl Parser<'_> {
    /// `ifExpr := "if" expr NEWLINE block ["else" NEWLINE block]`
    pub(crate) fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let span = self.cursor.expect(TokenKind::If)?.span;
        let condition = self.parse_expr()?;
        self.cursor.expect(TokenKind::Newline)?;
        let then_block = self.parse_block()?;

        let else_block = if self.cursor.eat(TokenKind::Else) {
            self.cursor.expect(TokenKind::Newline)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                then_block,
                else_block,
            },
            span,
        ))
    }

    /// `matchExpr := "match" expr NEWLINE INDENT (pattern "=>" expr NEWLINE?)+ DEDENT`
    pub(crate) fn parse_match(&mut self) -> Result<Expr, ParseError> {
        let span = self.cursor.expect(TokenKind::Match)?.span;
        let scrutinee = self.parse_expr()?;
        self.cursor.expect(TokenKind::Newline)?;
        self.cursor.expect(TokenKind::Indent)?;

        let mut arms = Vec::new();
        loop {
            let arm_span = self.cursor.current_span();
            let pattern = self.parse_pattern()?;
            self.cursor.expect(TokenKind::FatArrow)?;
            let expr = self.parse_expr()?;
            self.cursor.eat(TokenKind::Newline);
            arms.push(MatchArm {
                pattern,
                expr,
                span: arm_span,
            });
            if self.cursor.check(TokenKind::Dedent) {
                break;
            }
        }
        self.cursor.expect(TokenKind::Dedent)?;

        Ok(Expr::new(
            ExprKind::Match {
                scrutinee: Box::new(scrutinee),
                arms,
            },
            span,
        ))
    }

    /// `pattern := "_" | NUMBER | STRING | IDENT`
    fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Number => Ok(Pattern::Int(self.parse_int()?)),
            TokenKind::String => Ok(Pattern::Str(self.cursor.advance().text.clone())),
            TokenKind::Ident => {
                let name = self.cursor.advance().text.clone();
                Ok(if name == "_" {
                    Pattern::Wildcard
                } else {
                    Pattern::Name(name)
                })
            }
            found => Err(ParseError::at(
                self.cursor.current(),
                ParseErrorKind::InvalidPattern { found },
            )),
        }
    }
}
