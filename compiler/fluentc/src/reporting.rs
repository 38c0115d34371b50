//! Render pipeline errors as ariadne diagnostics.

use crate::FluentError;
use ariadne::{Config, Label, Report, ReportKind, Source};
use fluent_ir::Span;
use std::ops::Range;

/// Print a diagnostic for `err` to stderr.
pub fn report(err: &FluentError, path: &str, source: &str) {
    if build(err, path, source, true)
        .eprint((path.to_string(), Source::from(source)))
        .is_err()
    {
        eprintln!("{err}");
    }
}

/// Render a diagnostic without colors.
pub fn render(err: &FluentError, path: &str, source: &str) -> String {
    let mut out = Vec::new();
    if build(err, path, source, false)
        .write((path.to_string(), Source::from(source)), &mut out)
        .is_err()
    {
        return err.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build(
    err: &FluentError,
    path: &str,
    source: &str,
    color: bool,
) -> Report<'static, (String, Range<usize>)> {
    let range = label_range(source, err.span());
    let mut report = Report::build(ReportKind::Error, path.to_string(), range.start)
        .with_config(Config::default().with_color(color))
        .with_message(err.to_string())
        .with_label(Label::new((path.to_string(), range)).with_message(err.label()));
    if let Some(help) = err.help() {
        report = report.with_help(help);
    }
    report.finish()
}

/// Character range covering the character at `span` (empty at end of input).
///
/// ariadne 0.4 indexes sources by character, not byte.
pub fn label_range(source: &str, span: Span) -> Range<usize> {
    let byte = byte_offset(source, span);
    let start = source[..byte].chars().count();
    let width = usize::from(byte < source.len() && !source[byte..].starts_with('\n'));
    start..start + width
}

/// Byte offset of a 0-based line/column position, clamped to the source.
pub fn byte_offset(source: &str, span: Span) -> usize {
    let mut line_start = 0;
    for (line_no, line) in source.split_inclusive('\n').enumerate() {
        if line_no == span.line as usize {
            let content = line.trim_end_matches(['\n', '\r']).len();
            let mut offset = line_start + (span.column as usize).min(content);
            while !source.is_char_boundary(offset) {
                offset -= 1;
            }
            return offset;
        }
        line_start += line.len();
    }
    source.len()
}
