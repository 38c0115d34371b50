//! Function calls.

use super::{Flow, Interpreter};
use crate::{check_type, EvalErrorKind, EvalResult, FunctionValue, TypeCheckSite, Value};
use fluent_ir::{Expr, Span};
use tracing::trace;

impl Interpreter {
    /// Evaluate `func(args...)`.
    ///
    /// The callee is resolved by name before any argument is evaluated.
    pub(crate) fn eval_call(&mut self, func: &str, args: &[Expr], span: Span) -> EvalResult<Flow> {
        let callee = self.lookup(func, span)?;

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(value_or_return!(self.eval_expr(arg)?));
        }

        let result = match callee {
            Value::Function(function) => self.call_function(&function, values, span)?,
            Value::Builtin(builtin) => {
                trace!(name = builtin.name, args = values.len(), "builtin call");
                (builtin.func)(&values, &self.print_handler).map_err(|kind| kind.at(span))?
            }
            other => {
                return Err(EvalErrorKind::NotCallable {
                    name: func.to_owned(),
                    found: other.type_name(),
                }
                .at(span))
            }
        };
        Ok(Flow::Value(result))
    }

    /// Invoke a user function with already-evaluated arguments.
    ///
    /// Arity is checked first, then each argument against its parameter
    /// annotation as it is bound, then the result against the return
    /// annotation. The body runs in a new scope on top of the caller's.
    #[tracing::instrument(level = "trace", skip_all, fields(name = function.name()))]
    pub fn call_function(
        &mut self,
        function: &FunctionValue,
        args: Vec<Value>,
        span: Span,
    ) -> EvalResult<Value> {
        let decl = function.decl();
        if args.len() != decl.params.len() {
            return Err(EvalErrorKind::ArityMismatch {
                name: decl.name.clone(),
                expected: decl.params.len(),
                found: args.len(),
            }
            .at(span));
        }

        let mut scoped = self.scoped();
        for (param, arg) in decl.params.iter().zip(args) {
            check_type(&arg, &param.ty, || TypeCheckSite::Parameter {
                function: decl.name.clone(),
                param: param.name.clone(),
            })
            .map_err(|kind| kind.at(span))?;
            scoped.env.define(param.name.as_str(), arg);
        }

        let result = scoped.eval_statements(&decl.body)?.into_value();

        if let Some(ty) = &decl.return_type {
            check_type(&result, ty, || TypeCheckSite::Return {
                function: decl.name.clone(),
            })
            .map_err(|kind| kind.at(span))?;
        }
        Ok(result)
    }
}
