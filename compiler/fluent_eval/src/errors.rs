//! Runtime error types.
//!
//! Every runtime error is fatal for the current evaluation. Each kind maps to
//! one of four categories (see [`ErrorCategory`]).

use fluent_ir::{BinaryOp, Span};
use std::fmt;

pub type EvalResult<T> = Result<T, EvalError>;

/// Coarse classification of runtime errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorCategory {
    NameError,
    TypeError,
    IndexError,
    ValueError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::NameError => "NameError",
            ErrorCategory::TypeError => "TypeError",
            ErrorCategory::IndexError => "IndexError",
            ErrorCategory::ValueError => "ValueError",
        })
    }
}

/// A runtime error with the position of the expression that raised it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}: {} at {}", .kind.category(), .kind, .span)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Where a type annotation was checked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeCheckSite {
    Let { name: String },
    Parameter { function: String, param: String },
    Return { function: String },
}

impl fmt::Display for TypeCheckSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCheckSite::Let { name } => write!(f, "let binding '{name}'"),
            TypeCheckSite::Parameter { function, param } => {
                write!(f, "parameter '{param}' of '{function}'")
            }
            TypeCheckSite::Return { function } => write!(f, "return value of '{function}'"),
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    // === NameError ===
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    // === TypeError ===
    #[error("if condition must be Bool, found {found}")]
    NonBoolCondition { found: &'static str },
    #[error("'{op}' requires Bool operands, found {found}")]
    NonBoolOperand { op: BinaryOp, found: &'static str },
    #[error("unsupported operand types for '{op}': {left} and {right}")]
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("{site} expects {expected}, found {found}")]
    TypeMismatch {
        site: TypeCheckSite,
        expected: String,
        found: &'static str,
    },
    #[error("list index must be Int, found {found}")]
    NonIntegerIndex { found: &'static str },
    #[error("cannot index into {found}")]
    NotIndexable { found: &'static str },
    #[error("'{name}' is not callable, found {found}")]
    NotCallable { name: String, found: &'static str },
    #[error("{function}() does not accept {found}")]
    UnsupportedArgument {
        function: &'static str,
        found: &'static str,
    },

    // === IndexError ===
    #[error("list index {index} out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    // === ValueError ===
    #[error("'{name}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("no match found for value {value}")]
    NoMatch { value: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in '{op}'")]
    IntegerOverflow { op: BinaryOp },
    #[error("unknown operator '{op}'")]
    UnknownOperator { op: BinaryOp },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCategory::NameError,
            EvalErrorKind::NonBoolCondition { .. }
            | EvalErrorKind::NonBoolOperand { .. }
            | EvalErrorKind::InvalidOperands { .. }
            | EvalErrorKind::TypeMismatch { .. }
            | EvalErrorKind::NonIntegerIndex { .. }
            | EvalErrorKind::NotIndexable { .. }
            | EvalErrorKind::NotCallable { .. }
            | EvalErrorKind::UnsupportedArgument { .. } => ErrorCategory::TypeError,
            EvalErrorKind::IndexOutOfRange { .. } => ErrorCategory::IndexError,
            EvalErrorKind::ArityMismatch { .. }
            | EvalErrorKind::NoMatch { .. }
            | EvalErrorKind::DivisionByZero
            | EvalErrorKind::IntegerOverflow { .. }
            | EvalErrorKind::UnknownOperator { .. } => ErrorCategory::ValueError,
        }
    }

    /// Attach a position.
    #[inline]
    pub fn at(self, span: Span) -> EvalError {
        EvalError { kind: self, span }
    }
}
