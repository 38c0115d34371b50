//! Runtime values.
//!
//! Strings and lists are reference counted so copying a value into a binding
//! or an argument list never deep-copies.

use crate::BuiltinFn;
use fluent_ir::FnDecl;
use std::fmt;
use std::rc::Rc;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    /// Only produced by `/`.
    Float(f64),
    Str(Rc<str>),
    Bool(bool),
    List(Rc<Vec<Value>>),
    Function(FunctionValue),
    Builtin(BuiltinValue),
    Unit,
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(items))
    }

    /// Kind name used in error messages and type checks.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "String",
            Value::Bool(_) => "Bool",
            Value::List(_) => "List",
            Value::Function(_) => "Function",
            Value::Builtin(_) => "Builtin",
            Value::Unit => "Unit",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view used for mixed Int/Float arithmetic.
    #[allow(clippy::cast_precision_loss, reason = "Int/Float mixing is lossy by definition")]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "structural equality is exact")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(_), Value::Float(_)) | (Value::Float(_), Value::Int(_)) => {
                self.as_f64() == other.as_f64()
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // Strings inside lists are shown quoted.
                    match item {
                        Value::Str(s) => write!(f, "{:?}", &**s)?,
                        other => write!(f, "{other}")?,
                    }
                }
                f.write_str("]")
            }
            Value::Function(func) => write!(f, "<fn {}>", func.name()),
            Value::Builtin(b) => write!(f, "<builtin {}>", b.name),
            Value::Unit => f.write_str("()"),
        }
    }
}

/// Whole floats keep a trailing `.0` so they read differently from Ints.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

/// A user-defined function: a shared handle to its declaration.
#[derive(Clone)]
pub struct FunctionValue {
    decl: Rc<FnDecl>,
}

impl FunctionValue {
    pub fn new(decl: Rc<FnDecl>) -> Self {
        FunctionValue { decl }
    }

    pub fn decl(&self) -> &FnDecl {
        &self.decl
    }

    pub fn name(&self) -> &str {
        &self.decl.name
    }

    pub fn arity(&self) -> usize {
        self.decl.params.len()
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.decl, &other.decl)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.decl.name)
    }
}

/// A native function registered under a fixed name.
#[derive(Clone, Copy)]
pub struct BuiltinValue {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl PartialEq for BuiltinValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinValue({})", self.name)
    }
}
