//! Binary operator semantics for already-evaluated operands.
//!
//! Short-circuit operators (`and`, `or`, `and not`) are handled by the
//! interpreter before operands are evaluated and never reach this module.

use crate::{EvalErrorKind, Value};
use fluent_ir::BinaryOp;
use std::cmp::Ordering;

/// Apply a non-short-circuit binary operator.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => arithmetic(op, left, right),
        BinaryOp::Div => divide(left, right),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => {
            compare(op, left, right)
        }
        BinaryOp::And | BinaryOp::Or | BinaryOp::AndNot => {
            Err(EvalErrorKind::UnknownOperator { op })
        }
    }
}

fn invalid(op: BinaryOp, left: &Value, right: &Value) -> EvalErrorKind {
    EvalErrorKind::InvalidOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

/// `+ - *`. Int arithmetic is checked; any Float operand makes a Float.
fn arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => {
            let result = match op {
                BinaryOp::Add => a.checked_add(*b),
                BinaryOp::Sub => a.checked_sub(*b),
                _ => a.checked_mul(*b),
            };
            result
                .map(Value::Int)
                .ok_or(EvalErrorKind::IntegerOverflow { op })
        }
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            Ok(Value::string(format!("{a}{b}")))
        }
        (Value::List(a), Value::List(b)) if op == BinaryOp::Add => {
            Ok(Value::list(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => {
            let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
                return Err(invalid(op, left, right));
            };
            Ok(Value::Float(match op {
                BinaryOp::Add => a + b,
                BinaryOp::Sub => a - b,
                _ => a * b,
            }))
        }
    }
}

/// `/` is always true division.
fn divide(left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
        return Err(invalid(BinaryOp::Div, left, right));
    };
    if b == 0.0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    Ok(Value::Float(a / b))
}

/// Ordering comparisons on numbers or strings.
fn compare(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => return Err(invalid(op, left, right)),
        },
    };
    let holds = ordering.is_some_and(|ord| match op {
        BinaryOp::Lt => ord == Ordering::Less,
        BinaryOp::Gt => ord == Ordering::Greater,
        BinaryOp::LtEq => ord != Ordering::Greater,
        _ => ord != Ordering::Less,
    });
    Ok(Value::Bool(holds))
}

#[cfg(test)]
mod tests;
