//! Sextant CLI - syntax tree outlines from the command line.
//!
//! Prints the outline of a source file and maps between outline lines and
//! source positions in both directions.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use sextant::{Config, Sextant};
use tracing_subscriber::EnvFilter;

mod cli;

/// Sextant: syntax tree outlines with bidirectional position mapping.
#[derive(Parser)]
#[command(name = "sextant")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to `.sextant.yaml` in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the syntax tree outline of a file
    Tree {
        /// Source file to parse
        file: PathBuf,

        /// Grammar id to use instead of resolving it from the file name
        #[arg(short, long)]
        language: Option<String>,

        /// Print display lines as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the outline line enclosing a source position
    Locate {
        /// Source file to parse
        file: PathBuf,

        /// Row (0-indexed)
        row: usize,

        /// Byte column (0-indexed)
        col: usize,

        /// Grammar id to use instead of resolving it from the file name
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show the source range covered by an outline line
    Range {
        /// Source file to parse
        file: PathBuf,

        /// Outline line number (0-indexed)
        index: usize,

        /// Grammar id to use instead of resolving it from the file name
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List known grammar ids
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };
    let mut sextant = Sextant::with_config(&config);

    let result = match cli.command {
        Commands::Tree {
            file,
            language,
            json,
        } => cli::tree::run(&mut sextant, &file, language.as_deref(), json),
        Commands::Locate {
            file,
            row,
            col,
            language,
        } => cli::locate::run(&mut sextant, &file, language.as_deref(), row, col),
        Commands::Range {
            file,
            index,
            language,
        } => cli::range::run(&mut sextant, &file, language.as_deref(), index),
        Commands::Languages => {
            cli::languages::run(&sextant);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn load_config(path: Option<&Path>) -> sextant::Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(&std::env::current_dir()?),
    }
}

fn report(error: &sextant::Error) -> ExitCode {
    eprintln!("{}: {error}", "error".red().bold());
    // Show cause chain for nested errors
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  {}: {cause}", "caused by".dimmed());
        source = std::error::Error::source(cause);
    }
    ExitCode::FAILURE
}
