//! Tree-walking interpreter.
//!
//! Every evaluation step yields a [`Flow`]: either a plain value or a
//! `return` travelling outward. A `Return` short-circuits blocks, operands,
//! arguments and list elements until the enclosing function call turns it
//! back into a value. At top level it ends the program.

/// Unwrap `Flow::Value`, or return early with a `Flow::Return`.
macro_rules! value_or_return {
    ($flow:expr) => {
        match $flow {
            $crate::Flow::Value(value) => value,
            ret @ $crate::Flow::Return(_) => return Ok(ret),
        }
    };
}

mod builder;
mod call;
mod control;
mod scope_guard;

use crate::{
    check_type, evaluate_binary, BuiltinRegistry, Environment, EvalErrorKind, EvalResult,
    FunctionValue, SharedPrintHandler, TypeCheckSite, Value,
};
use fluent_ir::{BinaryOp, Expr, ExprKind, Span, Stmt, StmtKind};
use std::rc::Rc;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

/// Result of evaluating a statement or expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Value(Value),
    Return(Value),
}

impl Flow {
    /// The carried value, whether or not it is returning.
    pub fn into_value(self) -> Value {
        match self {
            Flow::Value(v) | Flow::Return(v) => v,
        }
    }
}

/// The interpreter: environment, builtins and output sink.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) print_handler: SharedPrintHandler,
    builtins: BuiltinRegistry,
}

impl Interpreter {
    /// Interpreter with the standard builtins printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Run a program and return the value of its last statement.
    ///
    /// A top-level `return` stops the program and yields its value.
    /// Definitions persist in the root scope across calls.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn evaluate(&mut self, program: &[Stmt]) -> EvalResult<Value> {
        let value = self.eval_statements(program)?.into_value();
        tracing::debug!(result = %value, "program finished");
        Ok(value)
    }

    /// Evaluate statements in the current scope.
    pub(crate) fn eval_statements(&mut self, statements: &[Stmt]) -> EvalResult<Flow> {
        let mut last = Value::Unit;
        for stmt in statements {
            match self.eval_stmt(stmt)? {
                Flow::Value(value) => last = value,
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Value(last))
    }

    /// Evaluate statements in a fresh scope.
    pub(crate) fn eval_block(&mut self, statements: &[Stmt]) -> EvalResult<Flow> {
        self.scoped().eval_statements(statements)
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match &stmt.kind {
            StmtKind::Let { name, ty, value } => {
                let value = value_or_return!(self.eval_expr(value)?);
                if let Some(ty) = ty {
                    check_type(&value, ty, || TypeCheckSite::Let { name: name.clone() })
                        .map_err(|kind| kind.at(stmt.span))?;
                }
                self.env.define(name.as_str(), value.clone());
                Ok(Flow::Value(value))
            }
            StmtKind::FnDecl(decl) => {
                let function = Value::Function(FunctionValue::new(Rc::clone(decl)));
                self.env.define(decl.name.as_str(), function.clone());
                Ok(Flow::Value(function))
            }
            StmtKind::Expr(expr) => self.eval_expr(expr),
            StmtKind::Return(expr) => {
                let value = value_or_return!(self.eval_expr(expr)?);
                Ok(Flow::Return(value))
            }
        }
    }

    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Flow> {
        let value = match &expr.kind {
            ExprKind::Number(n) => Value::Int(*n),
            ExprKind::String(s) => Value::string(s.as_str()),
            ExprKind::Boolean(b) => Value::Bool(*b),
            ExprKind::Var(name) => self.lookup(name, expr.span)?,
            ExprKind::Binary { left, op, right } => {
                return self.eval_binary(left, *op, right, expr.span)
            }
            ExprKind::Call { func, args } => return self.eval_call(func, args, expr.span),
            ExprKind::If {
                condition,
                then_block,
                else_block,
            } => return self.eval_if(condition, then_block, else_block.as_deref()),
            ExprKind::Match { scrutinee, arms } => {
                return self.eval_match(scrutinee, arms, expr.span)
            }
            ExprKind::ListLiteral { elements } => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(value_or_return!(self.eval_expr(element)?));
                }
                Value::list(items)
            }
            ExprKind::Index { target, index } => {
                return self.eval_index(target, index, expr.span)
            }
        };
        Ok(Flow::Value(value))
    }

    pub(crate) fn lookup(&self, name: &str, span: Span) -> EvalResult<Value> {
        self.env.lookup(name).cloned().ok_or_else(|| {
            EvalErrorKind::UndefinedVariable {
                name: name.to_owned(),
            }
            .at(span)
        })
    }

    fn eval_binary(
        &mut self,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
        span: Span,
    ) -> EvalResult<Flow> {
        if op.is_short_circuit() {
            return self.eval_logical(left, op, right);
        }
        let lhs = value_or_return!(self.eval_expr(left)?);
        let rhs = value_or_return!(self.eval_expr(right)?);
        evaluate_binary(op, &lhs, &rhs)
            .map(Flow::Value)
            .map_err(|kind| kind.at(span))
    }

    /// `and`, `or` and the lowered `and not`. Both operands must be Bool;
    /// the right one is skipped when the left decides the result.
    fn eval_logical(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> EvalResult<Flow> {
        let lhs = value_or_return!(self.eval_expr(left)?);
        let lhs = Self::bool_operand(op, &lhs, left.span)?;
        let decided = match op {
            BinaryOp::Or => lhs,
            _ => !lhs,
        };
        if decided {
            return Ok(Flow::Value(Value::Bool(lhs)));
        }

        let rhs = value_or_return!(self.eval_expr(right)?);
        let rhs = Self::bool_operand(op, &rhs, right.span)?;
        let result = if op == BinaryOp::AndNot { !rhs } else { rhs };
        Ok(Flow::Value(Value::Bool(result)))
    }

    fn bool_operand(op: BinaryOp, value: &Value, span: Span) -> EvalResult<bool> {
        value.as_bool().ok_or_else(|| {
            EvalErrorKind::NonBoolOperand {
                op,
                found: value.type_name(),
            }
            .at(span)
        })
    }

    fn eval_index(&mut self, target: &Expr, index: &Expr, span: Span) -> EvalResult<Flow> {
        let container = value_or_return!(self.eval_expr(target)?);
        let position = value_or_return!(self.eval_expr(index)?);

        let Value::Int(i) = position else {
            return Err(EvalErrorKind::NonIntegerIndex {
                found: position.type_name(),
            }
            .at(index.span));
        };
        let Value::List(items) = &container else {
            return Err(EvalErrorKind::NotIndexable {
                found: container.type_name(),
            }
            .at(target.span));
        };
        usize::try_from(i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .map(Flow::Value)
            .ok_or_else(|| {
                EvalErrorKind::IndexOutOfRange {
                    index: i,
                    len: items.len(),
                }
                .at(span)
            })
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
