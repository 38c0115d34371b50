//! `if` and `match` evaluation.

use super::{Flow, Interpreter};
use crate::{EvalErrorKind, EvalResult, Value};
use fluent_ir::{Expr, MatchArm, Pattern, Span, Stmt};

impl Interpreter {
    /// The condition must be a Bool. A false condition with no `else`
    /// yields Unit.
    pub(crate) fn eval_if(
        &mut self,
        condition: &Expr,
        then_block: &[Stmt],
        else_block: Option<&[Stmt]>,
    ) -> EvalResult<Flow> {
        let test = value_or_return!(self.eval_expr(condition)?);
        match (test, else_block) {
            (Value::Bool(true), _) => self.eval_block(then_block),
            (Value::Bool(false), Some(block)) => self.eval_block(block),
            (Value::Bool(false), None) => Ok(Flow::Value(Value::Unit)),
            (other, _) => Err(EvalErrorKind::NonBoolCondition {
                found: other.type_name(),
            }
            .at(condition.span)),
        }
    }

    /// Arms are tried in order; the first matching arm is evaluated in its
    /// own scope.
    pub(crate) fn eval_match(
        &mut self,
        scrutinee: &Expr,
        arms: &[MatchArm],
        span: Span,
    ) -> EvalResult<Flow> {
        let value = value_or_return!(self.eval_expr(scrutinee)?);
        for arm in arms {
            if self.pattern_matches(&arm.pattern, &value, arm.span)? {
                return self.scoped().eval_expr(&arm.expr);
            }
        }
        Err(EvalErrorKind::NoMatch {
            value: value.to_string(),
        }
        .at(span))
    }

    /// `Name` patterns compare against the name's current value; they never
    /// bind.
    fn pattern_matches(&self, pattern: &Pattern, value: &Value, span: Span) -> EvalResult<bool> {
        Ok(match pattern {
            Pattern::Wildcard => true,
            Pattern::Int(n) => *value == Value::Int(*n),
            Pattern::Str(s) => matches!(value, Value::Str(v) if **v == **s),
            Pattern::Name(name) => self.lookup(name, span)? == *value,
        })
    }
}
