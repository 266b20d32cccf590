//! # Sextant: Syntax Tree Outlines with Bidirectional Position Mapping
//!
//! Sextant parses source with tree-sitter and linearizes the syntax tree into a
//! deterministic, human-readable outline: one display line per node, in
//! pre-order. Alongside the outline it builds a position index that answers the
//! two questions a side-by-side source/tree view needs:
//!
//! - which display line encloses a source position (`enclosing_entry`)
//! - which source range a display line covers (`range_of`)
//!
//! ## Design Philosophy
//!
//! - **Whole loads** - every load parses and serializes from scratch and replaces
//!   the previous result in one step; there is no incremental update
//! - **Errors are data** - malformed source yields `ERROR` nodes, not failures
//! - **Queries never fail** - out-of-range lookups answer `None`
//!
//! ## Quick Start
//!
//! ```no_run
//! use sextant::Sextant;
//!
//! let mut sextant = Sextant::new();
//! let document = sextant.load("python", "def f(x):\n  return x\n")?;
//! println!("{}", document.outline().text());
//!
//! // Source pane cursor at row 1, column 4 -> display line
//! if let Some(line) = sextant.enclosing_entry(1, 4) {
//!     // Display line -> source range
//!     let range = sextant.range_of(line);
//!     println!("line {line} covers {range:?}");
//! }
//! # Ok::<(), sextant::Error>(())
//! ```

mod config;
mod error;
mod index;
mod languages;
mod outline;
mod text;
mod tree;

pub use config::{CONFIG_FILE_NAME, Config};
pub use error::{Error, Result};
pub use index::{PositionIndex, SourceRange};
pub use languages::LanguageResolver;
pub use languages::grammars::{self, Grammar};
pub use outline::{ANONYMOUS_MARKER, DisplayLine, INDENT, Outline};
pub use text::{char_offset, char_range, slice};
pub use tree::{SyntaxNode, SyntaxTree};

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

/// The result of one load: a parsed tree and its outline.
///
/// Immutable. A later load produces a new `Document` rather than changing this one.
#[derive(Debug)]
pub struct Document {
    tree: SyntaxTree,
    outline: Outline,
}

impl Document {
    /// Serialize a parsed tree into a document.
    #[must_use]
    pub fn new(tree: SyntaxTree) -> Self {
        let outline = Outline::serialize(tree.root());
        Self { tree, outline }
    }

    /// The parsed tree.
    #[must_use]
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// The outline of the tree.
    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The grammar the source was parsed with.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.tree.grammar()
    }

    /// See `PositionIndex::enclosing_entry`.
    #[must_use]
    pub fn enclosing_entry(&self, row: usize, col: usize) -> Option<usize> {
        self.outline.index().enclosing_entry(row, col)
    }

    /// See `PositionIndex::range_of`.
    #[must_use]
    pub fn range_of(&self, index: usize) -> Option<SourceRange> {
        self.outline.index().range_of(index)
    }
}

/// A source/outline session: resolves languages, loads documents, and answers
/// cursor queries against the most recently loaded one.
pub struct Sextant {
    resolver: LanguageResolver,
    parser: tree_sitter::Parser,
    document: Option<Document>,
}

impl Sextant {
    /// Create a session with the built-in language tables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(LanguageResolver::default())
    }

    /// Create a session whose resolver includes the overrides in `config`.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self::with_resolver(LanguageResolver::with_config(config))
    }

    fn with_resolver(resolver: LanguageResolver) -> Self {
        Self {
            resolver,
            parser: tree_sitter::Parser::new(),
            document: None,
        }
    }

    /// The resolver used by `load_named` and `load_file`.
    #[must_use]
    pub fn resolver(&self) -> &LanguageResolver {
        &self.resolver
    }

    // === Loading ===

    /// Parse `content` with `grammar` and make it the current document.
    ///
    /// The previous document is replaced only once the new one is fully built;
    /// on error it stays current.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedLanguage` if no grammar is compiled in for
    /// `grammar` (after aliasing), or `Error::Parser` if tree-sitter fails.
    pub fn load(&mut self, grammar: &str, content: impl AsRef<[u8]>) -> Result<&Document> {
        let start = Instant::now();
        let grammar = self.resolver.canonical(grammar);
        let tree = SyntaxTree::parse_with(&mut self.parser, grammar, content)?;
        let document = Document::new(tree);

        debug!(
            grammar = %document.grammar(),
            lines = document.outline().len(),
            has_errors = document.outline().has_errors(),
            elapsed = ?start.elapsed(),
            "Loaded document"
        );

        Ok(self.document.insert(document))
    }

    /// Resolve the language from `file_name`, then load `content`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLanguage` if `file_name` does not resolve, otherwise
    /// the errors of `Sextant::load`.
    pub fn load_named(&mut self, file_name: &str, content: impl AsRef<[u8]>) -> Result<&Document> {
        let grammar = self.resolver.resolve(file_name)?.to_string();
        self.load(&grammar, content)
    }

    /// Read a file, resolve its language from its name, and load it.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, otherwise the errors of
    /// `Sextant::load_named`.
    pub fn load_file(&mut self, path: &Path) -> Result<&Document> {
        let file_name = path.to_string_lossy();
        // Resolve before reading so an unknown language is reported even for
        // unreadable files.
        let grammar = self.resolver.resolve(&file_name)?.to_string();
        let content = std::fs::read(path)?;
        info!(path = %path.display(), %grammar, bytes = content.len(), "Loading file");
        self.load(&grammar, content)
    }

    /// Load with an explicit grammar when given, otherwise resolve it from the path.
    ///
    /// # Errors
    ///
    /// Same as `Sextant::load_file`, or `Sextant::load` when `grammar` is given.
    pub fn load_file_as(&mut self, path: &Path, grammar: Option<&str>) -> Result<&Document> {
        match grammar {
            Some(grammar) => {
                let content = std::fs::read(path)?;
                self.load(grammar, content)
            }
            None => self.load_file(path),
        }
    }

    // === Queries ===

    /// The current document, if anything has been loaded.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Display line enclosing source position `(row, col)` in the current document.
    #[must_use]
    pub fn enclosing_entry(&self, row: usize, col: usize) -> Option<usize> {
        self.document.as_ref()?.enclosing_entry(row, col)
    }

    /// Display line for a source selection between two `(row, col)` endpoints.
    ///
    /// The later endpoint is the query point, whichever end the selection was
    /// made from.
    #[must_use]
    pub fn entry_for_selection(
        &self,
        anchor: (usize, usize),
        cursor: (usize, usize),
    ) -> Option<usize> {
        let (row, col) = anchor.max(cursor);
        self.enclosing_entry(row, col)
    }

    /// Source range of display line `index` in the current document.
    #[must_use]
    pub fn range_of(&self, index: usize) -> Option<SourceRange> {
        self.document.as_ref()?.range_of(index)
    }
}

impl Default for Sextant {
    fn default() -> Self {
        Self::new()
    }
}
