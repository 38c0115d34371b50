//! Command handlers for the `fluent` CLI.
//!
//! Handlers print their own output and exit the process with status 1 on
//! failure, after rendering a diagnostic against the source file.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

use crate::reporting;
use crate::FluentError;

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Report a pipeline error and exit.
pub(crate) fn fail(err: &FluentError, path: &str, source: &str) -> ! {
    tracing::debug!(error = %err, "command failed");
    reporting::report(err, path, source);
    std::process::exit(1);
}
