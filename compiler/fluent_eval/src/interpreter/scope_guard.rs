//! RAII scope guard for the interpreter's environment.
//!
//! [`ScopedInterpreter`] pushes a scope on creation and pops it on drop, so
//! the scope is released on every exit path: normal return, `?` error
//! propagation, and unwinding.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! code inside the scope calls interpreter methods on the guard directly:
//!
//! ```text
//! let mut scoped = interpreter.scoped();
//! scoped.env.define(name, value);
//! scoped.eval_statements(body)?;
//! // scope popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard that owns one environment scope for its lifetime.
pub struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope parented on the current one; it is popped when the
    /// returned guard is dropped.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Interpreter, Value};

    #[test]
    fn guard_pops_scope_on_drop() {
        let mut interp = Interpreter::builder().build();
        let base = interp.env().depth();
        {
            let mut scoped = interp.scoped();
            scoped.env.define("tmp", Value::Int(1));
            assert_eq!(scoped.env().depth(), base + 1);
        }
        assert_eq!(interp.env().depth(), base);
        assert!(interp.env().lookup("tmp").is_none());
    }

    #[test]
    fn guard_pops_scope_on_early_error() {
        fn failing(interp: &mut Interpreter) -> Result<(), String> {
            let mut scoped = interp.scoped();
            scoped.env.define("tmp", Value::Int(1));
            Err("boom".into())
        }

        let mut interp = Interpreter::builder().build();
        let base = interp.env().depth();
        assert!(failing(&mut interp).is_err());
        assert_eq!(interp.env().depth(), base);
    }
}
