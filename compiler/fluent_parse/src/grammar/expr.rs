//! Expression parsing.
//!
//! Binary operators use precedence climbing:
//! or (1) < and (2) < comparisons (3) < additive (4) < multiplicative (5).
//! All levels are left-associative, so the right operand is parsed one
//! level tighter than the operator itself.

use crate::{ParseError, ParseErrorKind, Parser};
use fluent_ir::{BinaryOp, Expr, ExprKind, TokenKind};

/// How an atom was written, which decides what may follow it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AtomShape {
    /// A bare identifier (or `print`): the only callable form.
    Name,
    /// `if` or `match`: already closed by the DEDENT ending its block.
    Block,
    Other,
}

/// An expression and whether its last token closed an indented block.
struct Parsed {
    expr: Expr,
    closed_block: bool,
}

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        Ok(self.parse_binary(1)?.expr)
    }

    /// Nothing continues an expression past a closing DEDENT; the next line
    /// starts a new statement.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Parsed, ParseError> {
        let mut left = self.parse_unary()?;
        while !left.closed_block {
            let Some(op) = self.binary_op() else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            let span = self.cursor.advance().span;
            let right = self.parse_binary(prec + 1)?;
            left = Parsed {
                expr: Expr::binary(left.expr, op, right.expr, span),
                closed_block: right.closed_block,
            };
        }
        Ok(left)
    }

    /// Map the current token to a binary operator.
    fn binary_op(&self) -> Option<BinaryOp> {
        Some(match self.cursor.current_kind() {
            TokenKind::Or => BinaryOp::Or,
            TokenKind::And => BinaryOp::And,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            _ => return None,
        })
    }

    /// `unary := "not" unary | postfix`
    ///
    /// `not e` is lowered to `Binary(true, AndNot, e)`.
    fn parse_unary(&mut self) -> Result<Parsed, ParseError> {
        if self.cursor.check(TokenKind::Not) {
            let span = self.cursor.advance().span;
            let operand = self.parse_unary()?;
            let truth = Expr::new(ExprKind::Boolean(true), span);
            return Ok(Parsed {
                expr: Expr::binary(truth, BinaryOp::AndNot, operand.expr, span),
                closed_block: operand.closed_block,
            });
        }
        let (atom, shape) = self.parse_atom()?;
        if shape == AtomShape::Block {
            return Ok(Parsed {
                expr: atom,
                closed_block: true,
            });
        }
        Ok(Parsed {
            expr: self.parse_postfix(atom, shape == AtomShape::Name)?,
            closed_block: false,
        })
    }

    /// `postfix := atom ( "(" args ")" | "[" expr "]" )*`
    ///
    /// Only a bare name can be called, so `(f)()` and `f()()` are rejected.
    fn parse_postfix(&mut self, mut expr: Expr, mut callable: bool) -> Result<Expr, ParseError> {
        loop {
            match self.cursor.current_kind() {
                TokenKind::LParen => {
                    let Some(func) = expr
                        .as_var()
                        .filter(|_| callable)
                        .map(str::to_owned)
                    else {
                        return Err(ParseError::at(
                            self.cursor.current(),
                            ParseErrorKind::CallOnNonIdentifier,
                        ));
                    };
                    self.cursor.advance();
                    let args = self.parse_comma_list(TokenKind::RParen)?;
                    expr = Expr::new(ExprKind::Call { func, args }, expr.span);
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let index = self.parse_expr()?;
                    self.cursor.expect(TokenKind::RBracket)?;
                    let span = expr.span;
                    expr = Expr::new(
                        ExprKind::Index {
                            target: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
            callable = false;
        }
    }

    /// Comma-separated expressions up to and including `close`.
    /// A trailing comma is accepted.
    fn parse_comma_list(&mut self, close: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        while !self.cursor.check(close) {
            items.push(self.parse_expr()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(close)?;
        Ok(items)
    }

    fn parse_atom(&mut self) -> Result<(Expr, AtomShape), ParseError> {
        let span = self.cursor.current_span();
        let expr = match self.cursor.current_kind() {
            TokenKind::Match => return Ok((self.parse_match()?, AtomShape::Block)),
            TokenKind::If => return Ok((self.parse_if()?, AtomShape::Block)),
            TokenKind::Ident => {
                let name = self.cursor.advance().text.clone();
                return Ok((Expr::new(ExprKind::Var(name), span), AtomShape::Name));
            }
            // `print` is a keyword but names the built-in function.
            TokenKind::Print => {
                self.cursor.advance();
                let name = ExprKind::Var("print".to_owned());
                return Ok((Expr::new(name, span), AtomShape::Name));
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(TokenKind::RParen)?;
                inner
            }
            TokenKind::Number => Expr::new(ExprKind::Number(self.parse_int()?), span),
            TokenKind::String => {
                let text = self.cursor.advance().text.clone();
                Expr::new(ExprKind::String(text), span)
            }
            TokenKind::True | TokenKind::False => {
                let value = self.cursor.advance().kind == TokenKind::True;
                Expr::new(ExprKind::Boolean(value), span)
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let elements = self.parse_comma_list(TokenKind::RBracket)?;
                Expr::new(ExprKind::ListLiteral { elements }, span)
            }
            found => {
                return Err(ParseError::at(
                    self.cursor.current(),
                    ParseErrorKind::ExpectedExpression { found },
                ))
            }
        };
        Ok((expr, AtomShape::Other))
    }

    /// Consume a `Number` token and convert its text.
    pub(crate) fn parse_int(&mut self) -> Result<i64, ParseError> {
        let token = self.cursor.expect(TokenKind::Number)?;
        token.text.parse::<i64>().map_err(|_| {
            ParseError::at(
                token,
                ParseErrorKind::InvalidNumber {
                    text: token.text.clone(),
                },
            )
        })
    }
}

