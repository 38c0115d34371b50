//! Fluent driver library.
//!
//! Chains the three stages (lex, parse, evaluate) and unifies their errors
//! so callers get one `Result` per source text. The `fluent` binary is a thin
//! shell over this crate.

pub mod commands;
pub mod dump;
pub mod reporting;
mod tracing_setup;

pub use tracing_setup::init_tracing;

use fluent_eval::{EvalError, Interpreter, Value};
use fluent_ir::{Span, Stmt, Token};
use fluent_lexer::LexError;
use fluent_parse::ParseError;

/// The first error from any stage.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FluentError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl FluentError {
    pub fn span(&self) -> Span {
        match self {
            FluentError::Lex(e) => e.span,
            FluentError::Parse(e) => e.span,
            FluentError::Eval(e) => e.span,
        }
    }

    /// Short label for the offending location.
    pub fn label(&self) -> String {
        match self {
            FluentError::Lex(e) => e.kind.to_string(),
            FluentError::Parse(e) => format!("found {}", e.found),
            FluentError::Eval(e) => e.category().to_string(),
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            FluentError::Lex(e) => e.help(),
            FluentError::Parse(_) | FluentError::Eval(_) => None,
        }
    }
}

/// Tokenize source text.
pub fn lex_source(source: &str) -> Result<Vec<Token>, FluentError> {
    Ok(fluent_lexer::lex(source)?)
}

/// Tokenize and parse source text.
pub fn parse_source(source: &str) -> Result<Vec<Stmt>, FluentError> {
    let tokens = lex_source(source)?;
    Ok(fluent_parse::parse(&tokens)?)
}

/// Run source text on a fresh interpreter that prints to stdout.
pub fn run_source(source: &str) -> Result<Value, FluentError> {
    run_with(&mut Interpreter::new(), source)
}

/// Run source text on an existing interpreter (its definitions persist).
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_with(interpreter: &mut Interpreter, source: &str) -> Result<Value, FluentError> {
    let program = parse_source(source)?;
    Ok(interpreter.evaluate(&program)?)
}
