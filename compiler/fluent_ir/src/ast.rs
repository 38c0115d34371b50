//! AST node definitions.
//!
//! Nodes are plain owned trees: every node pairs a closed `kind` enum with the
//! `Span` of the token that introduced it. Function declarations are shared
//! through `Rc` so a function value can point at its declaration without
//! copying the body.

use crate::{BinaryOp, Span};
use std::fmt;
use std::rc::Rc;

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        )
    }

    /// The bare identifier this expression names, if it is a `Var`.
    pub fn as_var(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Var(name) => Some(name),
            _ => None,
        }
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Integer literal: `42`
    Number(i64),
    /// String literal: `"hi"`
    String(String),
    /// Boolean literal: `true`
    Boolean(bool),
    /// Variable reference: `x`
    Var(String),
    /// Binary operation: `left op right`
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// Call of a named callee: `f(a, b)`
    Call { func: String, args: Vec<Expr> },
    /// `if` expression with indented blocks.
    If {
        condition: Box<Expr>,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
    },
    /// `match` expression; arms are tried in order.
    Match {
        scrutinee: Box<Expr>,
        arms: Vec<MatchArm>,
    },
    /// List literal: `[1, 2, 3]`
    ListLiteral { elements: Vec<Expr> },
    /// Indexing: `target[index]`
    Index { target: Box<Expr>, index: Box<Expr> },
}

/// A statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `let name[: ty] = value`
    Let {
        name: String,
        ty: Option<TypeExpr>,
        value: Expr,
    },
    /// `fn name(params) [-> ty]` followed by a block.
    FnDecl(Rc<FnDecl>),
    /// An expression evaluated for its value.
    Expr(Expr),
    /// `return value`
    Return(Expr),
}

/// A function declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FnDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Option<TypeExpr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// A typed function parameter: `name: ty`.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
    pub span: Span,
}

/// One `pattern => expr` arm of a match.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchArm {
    pub pattern: Pattern,
    pub expr: Expr,
    pub span: Span,
}

/// Match patterns.
///
/// `Name` is a value test against the current binding of that name, never a
/// new binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Wildcard,
    Int(i64),
    Str(String),
    Name(String),
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => f.write_str("_"),
            Pattern::Int(n) => write!(f, "{n}"),
            Pattern::Str(s) => write!(f, "{s:?}"),
            Pattern::Name(name) => f.write_str(name),
        }
    }
}

/// A type annotation: `Int`, `List[List[String]]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Simple(String),
    List(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn simple(name: impl Into<String>) -> Self {
        TypeExpr::Simple(name.into())
    }

    pub fn list(element: TypeExpr) -> Self {
        TypeExpr::List(Box::new(element))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Simple(name) => f.write_str(name),
            TypeExpr::List(elem) => write!(f, "List[{elem}]"),
        }
    }
}

#[cfg(test)]
mod tests;
