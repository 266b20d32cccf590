//! Common display utilities for CLI commands.

use colored::Colorize;
use sextant::{Document, SourceRange};

/// Print one outline line prefixed with its number.
pub fn print_outline_line(document: &Document, index: usize) {
    let Some(text) = document.outline().rendered_lines().get(index) else {
        return;
    };
    println!("{} {}", format!("{index:>5}").dimmed(), text);
}

/// Format a range the way the index stores it (0-based rows and byte columns).
pub fn format_range(range: SourceRange) -> String {
    format!(
        "{}:{} - {}:{}",
        range.start_row, range.start_col, range.end_row, range.end_col
    )
}

/// Warn on stderr when the parsed source had syntax errors.
pub fn warn_on_syntax_errors(document: &Document) {
    if document.outline().has_errors() {
        eprintln!(
            "{}: source contains syntax errors (shown as ERROR/MISSING nodes)",
            "warning".yellow().bold()
        );
    }
}
