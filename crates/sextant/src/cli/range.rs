//! `sextant range` command implementation.

use std::path::Path;

use colored::Colorize;
use sextant::Sextant;

use super::display::{format_range, print_outline_line};

/// Run the range command.
pub fn run(
    sextant: &mut Sextant,
    file: &Path,
    language: Option<&str>,
    index: usize,
) -> Result<(), sextant::Error> {
    let document = sextant.load_file_as(file, language)?;

    let Some(range) = document.range_of(index) else {
        println!(
            "{}",
            format!(
                "No outline line {index} (outline has {} lines)",
                document.outline().len()
            )
            .dimmed()
        );
        return Ok(());
    };

    print_outline_line(document, index);
    println!("{}: {}", "Range".dimmed(), format_range(range));

    let source = document.tree().source();
    if let Some(chars) = sextant::char_range(source, range) {
        println!(
            "{}: {}..{}",
            "Characters".dimmed(),
            chars.start,
            chars.end
        );
    }
    if let Some(text) = sextant::slice(source, range) {
        println!("{}", "Source:".dimmed());
        println!("{}", text.cyan());
    }
    Ok(())
}
