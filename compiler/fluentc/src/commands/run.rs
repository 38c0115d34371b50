//! `fluent run`: evaluate a program.

use super::{fail, read_file};

/// Run a file, printing its final value unless it is unit.
pub fn run_file(path: &str) {
    let content = read_file(path);
    match crate::run_source(&content) {
        Ok(value) if value.is_unit() => {}
        Ok(value) => println!("{value}"),
        Err(err) => fail(&err, path, &content),
    }
}
