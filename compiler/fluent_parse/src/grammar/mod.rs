//! Grammar productions.
//!
//! Each module extends `Parser` with methods for one group of productions:
//!
//! - [`stmt`]: statements, function declarations and blocks
//! - [`expr`]: operators, postfix calls/indexing and atoms
//! - [`control`]: `if` and `match` expressions, patterns
//! - [`ty`]: type annotations

mod control;
mod expr;
mod stmt;
mod ty;
