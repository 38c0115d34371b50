//! Fluent Eval - tree-walking interpreter.
//!
//! Evaluates the AST produced by `fluent_parse` directly:
//! - `Value` is the runtime value model
//! - `Environment` is an index-based scope store; lookups walk parent links
//! - `BuiltinRegistry` holds the native functions (`print`, `len`)
//! - type annotations are checked at runtime at `let`, parameter binding and
//!   function return
//!
//! # Scoping
//!
//! A call pushes its scope on top of the *caller's* current scope, so a
//! function body can see the caller's locals. `if` branches and `match` arms
//! also get their own scope. Scopes are released by an RAII guard, which
//! keeps the environment consistent when an error unwinds.

mod builtins;
mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod type_check;
mod value;

pub use builtins::{BuiltinFn, BuiltinRegistry};
pub use environment::{Environment, ScopeId};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult, TypeCheckSite};
pub use interpreter::{Flow, Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use type_check::{check_type, value_matches};
pub use value::{BuiltinValue, FunctionValue, Value};
