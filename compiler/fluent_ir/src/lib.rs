//! Fluent IR - shared data types for the Fluent pipeline.
//!
//! This crate holds the plain data passed between stages:
//! - `Span` for source positions (0-based line and column)
//! - `Token` / `TokenKind` produced by the lexer
//! - AST nodes (`Expr`, `Stmt`, `Pattern`, `TypeExpr`) produced by the parser
//!
//! Everything here is immutable once built and carries no behavior beyond
//! small queries and `Display` impls used by diagnostics.

pub mod ast;
mod operators;
mod span;
mod token;

pub use ast::{Expr, ExprKind, FnDecl, MatchArm, Param, Pattern, Stmt, StmtKind, TypeExpr};
pub use operators::BinaryOp;
pub use span::Span;
pub use token::{Token, TokenKind};
