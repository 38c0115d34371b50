//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::{fail, read_file};
use crate::dump;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match crate::lex_source(&content) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            print!("{}", dump::tokens(&tokens));
        }
        Err(err) => fail(&err, path, &content),
    }
}

/// Parse a file and display its AST.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match crate::parse_source(&content) {
        Ok(program) => {
            println!("AST for '{}' ({} statements):", path, program.len());
            print!("{}", dump::program(&program));
        }
        Err(err) => fail(&err, path, &content),
    }
}
