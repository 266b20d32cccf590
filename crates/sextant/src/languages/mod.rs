//! Language resolution: file name to grammar id.
//!
//! Resolution order:
//!
//! 1. Exact, case-insensitive match of the whole file name (`Dockerfile`,
//!    `CMakeLists.txt`). Checked first so extensionless conventional files resolve.
//! 2. The extension after the last dot, matched case-sensitively and then
//!    lowercased.
//!
//! The resolved id then passes through the alias table, so callers always see the
//! canonical id the grammar registry uses (`c_sharp` becomes `csharp`).
//!
//! The built-in tables are immutable data. `LanguageResolver::builtin` builds them
//! into lookup maps once per process; a resolver with user overrides is built
//! once from a `Config` and never mutated afterward.

pub mod grammars;
mod tables;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::LazyLock;

use tracing::{trace, warn};

use crate::config::Config;
use crate::error::{Error, Result};

static BUILTIN: LazyLock<LanguageResolver> = LazyLock::new(LanguageResolver::from_tables);

/// Maps file names to canonical grammar ids.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    /// Lowercased file name to grammar id
    filenames: HashMap<String, String>,
    /// Extension (no dot) to grammar id
    extensions: HashMap<String, String>,
    /// Grammar id to canonical grammar id
    aliases: HashMap<String, String>,
}

impl LanguageResolver {
    /// The process-wide resolver built from the built-in tables.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a resolver from the built-in tables with `config` layered on top.
    ///
    /// Configured mappings win over built-in ones.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let mut resolver = Self::builtin().clone();

        for (name, grammar) in &config.filenames {
            resolver
                .filenames
                .insert(name.to_lowercase(), grammar.clone());
        }
        for (ext, grammar) in &config.extensions {
            let ext = ext.strip_prefix('.').unwrap_or(ext);
            resolver.extensions.insert(ext.to_string(), grammar.clone());
        }
        for (alias, grammar) in &config.aliases {
            resolver.aliases.insert(alias.clone(), grammar.clone());
        }

        for grammar in config
            .filenames
            .values()
            .chain(config.extensions.values())
        {
            if resolver.compiled_grammar(grammar).is_none() {
                warn!(%grammar, "Configured grammar is not compiled in");
            }
        }

        resolver
    }

    fn from_tables() -> Self {
        let owned = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|(key, grammar)| ((*key).to_string(), (*grammar).to_string()))
                .collect::<HashMap<_, _>>()
        };

        Self {
            filenames: owned(tables::FILENAMES),
            extensions: owned(tables::EXTENSIONS),
            aliases: owned(tables::ALIASES),
        }
    }

    /// Resolve a file name (or path) to a canonical grammar id.
    ///
    /// Only the final path component is considered.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLanguage` if neither the file name nor its extension
    /// is in the tables.
    pub fn resolve(&self, file_name: &str) -> Result<&str> {
        let name = Path::new(file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file_name);

        if let Some(grammar) = self.filenames.get(&name.to_lowercase()) {
            trace!(file_name = name, grammar = %grammar, "Resolved by file name");
            return Ok(self.canonical(grammar));
        }

        let grammar = name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .and_then(|ext| {
                self.extensions
                    .get(ext)
                    .or_else(|| self.extensions.get(&ext.to_lowercase()))
            });

        match grammar {
            Some(grammar) => {
                trace!(file_name = name, grammar = %grammar, "Resolved by extension");
                Ok(self.canonical(grammar))
            }
            None => Err(Error::unknown_language(file_name)),
        }
    }

    /// Apply the alias table to a grammar id.
    ///
    /// Ids without an alias are returned unchanged.
    #[must_use]
    pub fn canonical<'a>(&'a self, grammar: &'a str) -> &'a str {
        self.aliases.get(grammar).map_or(grammar, String::as_str)
    }

    /// The compiled-in grammar a resolved id parses with, if any.
    ///
    /// This resolver's aliases apply first, then the built-in ones, matching
    /// what `SyntaxTree::parse` does with the id.
    #[must_use]
    pub fn compiled_grammar(&self, grammar: &str) -> Option<grammars::Grammar> {
        let grammar = Self::builtin().canonical(self.canonical(grammar));
        grammars::Grammar::from_id(grammar)
    }

    /// Every canonical grammar id this resolver can produce, sorted.
    #[must_use]
    pub fn grammars(&self) -> Vec<&str> {
        self.filenames
            .values()
            .chain(self.extensions.values())
            .map(|grammar| self.canonical(grammar))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
