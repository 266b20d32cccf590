//! `sextant tree` command implementation.

use std::path::Path;

use sextant::Sextant;

use super::display::warn_on_syntax_errors;

/// Run the tree command.
pub fn run(
    sextant: &mut Sextant,
    file: &Path,
    language: Option<&str>,
    json: bool,
) -> Result<(), sextant::Error> {
    let document = sextant.load_file_as(file, language)?;

    if json {
        println!("{}", serde_json::to_string_pretty(document.outline())?);
    } else {
        println!("{}", document.outline().text());
    }

    warn_on_syntax_errors(document);
    Ok(())
}
