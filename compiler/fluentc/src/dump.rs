//! Plain-text dumps of tokens and ASTs for `fluent lex` / `fluent parse`.
//!
//! The AST dump prints one labeled line per node, children indented two
//! spaces under their parent.

use fluent_ir::{Expr, ExprKind, MatchArm, Stmt, StmtKind, Token};

/// One line per token: `Kind 'text' @ line:col` (1-based).
pub fn tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{:?} '{}' @ {}\n", token.kind, token.text, token.span));
    }
    out
}

/// Render a program as an indented node tree.
pub fn program(statements: &[Stmt]) -> String {
    let mut dumper = Dumper::default();
    for stmt in statements {
        dumper.stmt(stmt, 0);
    }
    dumper.out
}

#[derive(Default)]
struct Dumper {
    out: String,
}

impl Dumper {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn block(&mut self, label: &str, statements: &[Stmt], depth: usize) {
        self.line(depth, label);
        for stmt in statements {
            self.stmt(stmt, depth + 1);
        }
    }

    fn stmt(&mut self, stmt: &Stmt, depth: usize) {
        match &stmt.kind {
            StmtKind::Let { name, ty, value } => {
                match ty {
                    Some(ty) => self.line(depth, &format!("LetStmt(name={name}, type={ty})")),
                    None => self.line(depth, &format!("LetStmt(name={name})")),
                }
                self.expr(value, depth + 1);
            }
            StmtKind::FnDecl(decl) => {
                self.line(depth, &format!("FnDecl(name={})", decl.name));
                for param in &decl.params {
                    self.line(
                        depth + 1,
                        &format!("Param(name={}, type={})", param.name, param.ty),
                    );
                }
                if let Some(ty) = &decl.return_type {
                    self.line(depth + 1, &format!("Returns(type={ty})"));
                }
                self.block("Body", &decl.body, depth + 1);
            }
            StmtKind::Expr(expr) => {
                self.line(depth, "ExprStmt");
                self.expr(expr, depth + 1);
            }
            StmtKind::Return(expr) => {
                self.line(depth, "ReturnStmt");
                self.expr(expr, depth + 1);
            }
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        match &expr.kind {
            ExprKind::Number(n) => self.line(depth, &format!("Number(value={n})")),
            ExprKind::String(s) => self.line(depth, &format!("String(value={s:?})")),
            ExprKind::Boolean(b) => self.line(depth, &format!("Boolean(value={b})")),
            ExprKind::Var(name) => self.line(depth, &format!("Var(name={name})")),
            ExprKind::Binary { left, op, right } => {
                self.line(depth, &format!("Binary(op={op})"));
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            }
            ExprKind::Call { func, args } => {
                self.line(depth, &format!("Call(func={func})"));
                for arg in args {
                    self.expr(arg, depth + 1);
                }
            }
            ExprKind::If {
                condition,
                then_block,
                else_block,
            } => {
                self.line(depth, "IfExpr");
                self.line(depth + 1, "Condition");
                self.expr(condition, depth + 2);
                self.block("Then", then_block, depth + 1);
                if let Some(else_block) = else_block {
                    self.block("Else", else_block, depth + 1);
                }
            }
            ExprKind::Match { scrutinee, arms } => {
                self.line(depth, "MatchExpr");
                self.line(depth + 1, "Matched");
                self.expr(scrutinee, depth + 2);
                self.line(depth + 1, "Cases");
                for arm in arms {
                    self.arm(arm, depth + 2);
                }
            }
            ExprKind::ListLiteral { elements } => {
                self.line(depth, &format!("ListLiteral(len={})", elements.len()));
                for element in elements {
                    self.expr(element, depth + 1);
                }
            }
            ExprKind::Index { target, index } => {
                self.line(depth, "IndexExpr");
                self.expr(target, depth + 1);
                self.expr(index, depth + 1);
            }
        }
    }

    fn arm(&mut self, arm: &MatchArm, depth: usize) {
        self.line(depth, &format!("MatchCase(pattern={})", arm.pattern));
        self.expr(&arm.expr, depth + 1);
    }
}
