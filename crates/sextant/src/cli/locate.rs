//! `sextant locate` command implementation.

use std::path::Path;

use colored::Colorize;
use sextant::Sextant;

use super::display::{format_range, print_outline_line};

/// Run the locate command.
pub fn run(
    sextant: &mut Sextant,
    file: &Path,
    language: Option<&str>,
    row: usize,
    col: usize,
) -> Result<(), sextant::Error> {
    let document = sextant.load_file_as(file, language)?;

    let Some(index) = document.enclosing_entry(row, col) else {
        println!(
            "{}",
            format!("No node encloses {row}:{col}").dimmed()
        );
        return Ok(());
    };

    print_outline_line(document, index);
    if let Some(range) = document.range_of(index) {
        println!("{}: {}", "Range".dimmed(), format_range(range));
    }
    Ok(())
}
