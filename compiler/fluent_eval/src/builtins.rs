//! Native functions available to every program.
//!
//! Each interpreter builds its own registry and installs it into the root
//! scope, so builtins are ordinary bindings that user code looks up by name.

use crate::{Environment, EvalErrorKind, PrintHandler, Value};
use crate::value::BuiltinValue;
use rustc_hash::FxHashMap;

/// Signature of a native function.
pub type BuiltinFn = fn(&[Value], &PrintHandler) -> Result<Value, EvalErrorKind>;

/// Name → native function table.
#[derive(Clone, Debug)]
pub struct BuiltinRegistry {
    entries: FxHashMap<&'static str, BuiltinValue>,
}

impl BuiltinRegistry {
    /// Registry with the standard builtins (`print`, `len`).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("print", builtin_print);
        registry.register("len", builtin_len);
        registry
    }

    pub fn empty() -> Self {
        BuiltinRegistry {
            entries: FxHashMap::default(),
        }
    }

    /// Add or replace a builtin.
    pub fn register(&mut self, name: &'static str, func: BuiltinFn) {
        self.entries.insert(name, BuiltinValue { name, func });
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bind every builtin in the environment's root scope.
    pub fn install(&self, env: &mut Environment) {
        for builtin in self.entries.values() {
            env.define_global(builtin.name, Value::Builtin(*builtin));
        }
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `print(args...)`: display forms joined by a space, then a newline.
fn builtin_print(args: &[Value], out: &PrintHandler) -> Result<Value, EvalErrorKind> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    out.println(&line);
    Ok(Value::Unit)
}

/// `len(x)`: characters in a String or elements in a List.
fn builtin_len(args: &[Value], _out: &PrintHandler) -> Result<Value, EvalErrorKind> {
    let [arg] = args else {
        return Err(EvalErrorKind::ArityMismatch {
            name: "len".into(),
            expected: 1,
            found: args.len(),
        });
    };
    let len = match arg {
        Value::Str(s) => s.chars().count(),
        Value::List(items) => items.len(),
        other => {
            return Err(EvalErrorKind::UnsupportedArgument {
                function: "len",
                found: other.type_name(),
            })
        }
    };
    Ok(Value::Int(i64::try_from(len).unwrap_or(i64::MAX)))
}
