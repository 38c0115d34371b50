//! `InterpreterBuilder` for creating Interpreter instances.

use super::Interpreter;
use crate::{stdout_handler, BuiltinRegistry, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults: a fresh environment, the standard builtins, and stdout output.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    builtins: Option<BuiltinRegistry>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial environment. Builtins are still installed into its
    /// root scope.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Replace the builtin table.
    #[must_use]
    pub fn builtins(mut self, builtins: BuiltinRegistry) -> Self {
        self.builtins = Some(builtins);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let builtins = self.builtins.unwrap_or_default();
        let mut env = self.env.unwrap_or_default();
        builtins.install(&mut env);
        Interpreter {
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            builtins,
        }
    }
}
