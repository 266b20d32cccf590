//! `sextant languages` command implementation.

use colored::Colorize;
use sextant::Sextant;

/// Run the languages command.
pub fn run(sextant: &Sextant) {
    let resolver = sextant.resolver();
    let grammars = resolver.grammars();
    let compiled = grammars
        .iter()
        .filter(|grammar| resolver.compiled_grammar(grammar).is_some())
        .count();

    println!(
        "{} {} grammar ids, {} with a compiled-in parser",
        "Known".cyan().bold(),
        grammars.len(),
        compiled
    );
    println!();

    for grammar in grammars {
        if resolver.compiled_grammar(grammar).is_some() {
            println!("  {} {}", "✓".green(), grammar.white().bold());
        } else {
            println!("  {} {}", "•".dimmed(), grammar.dimmed());
        }
    }
}
