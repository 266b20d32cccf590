//! Tree-sitter parsing and the node abstraction the outline is built from.
//!
//! `SyntaxTree` owns a parsed tree together with the source bytes it came from.
//! It is immutable: every load parses from scratch, there is no incremental
//! re-parsing and no editing of an existing tree.
//!
//! `SyntaxNode` is the read-only view of a node that the serializer needs. It is
//! implemented for `tree_sitter::Node`, and tests implement it for in-memory
//! trees so serializer properties can be checked without a grammar.

use std::time::Instant;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::index::SourceRange;
use crate::languages::LanguageResolver;
use crate::languages::grammars::Grammar;

/// Read-only view of a syntax tree node.
///
/// `'t` is the lifetime of the tree that owns the node. Field names are resolved
/// by the parent in `field_children`, so nodes never need a parent reference.
pub trait SyntaxNode<'t>: Copy {
    /// Grammar type name (`function_definition`, `(`, `ERROR`, ...).
    fn kind(&self) -> &'t str;

    /// `false` for anonymous tokens such as punctuation and keywords.
    fn is_named(&self) -> bool;

    /// Whether this node stands in for source the grammar could not parse.
    fn is_error_node(&self) -> bool {
        self.kind() == "ERROR"
    }

    /// Position of the node in the source.
    fn source_range(&self) -> SourceRange;

    /// Children in source order, each with the field name this node assigns it.
    fn field_children(&self) -> Vec<(Option<&'t str>, Self)>;
}

impl<'t> SyntaxNode<'t> for tree_sitter::Node<'t> {
    fn kind(&self) -> &'t str {
        tree_sitter::Node::kind(self)
    }

    fn is_named(&self) -> bool {
        tree_sitter::Node::is_named(self)
    }

    fn is_error_node(&self) -> bool {
        self.is_error() || self.is_missing()
    }

    fn source_range(&self) -> SourceRange {
        self.range().into()
    }

    fn field_children(&self) -> Vec<(Option<&'t str>, Self)> {
        let mut children = Vec::with_capacity(self.child_count());
        let mut cursor = self.walk();
        if cursor.goto_first_child() {
            loop {
                children.push((cursor.field_name(), cursor.node()));
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        children
    }
}

/// A parsed syntax tree and the source it was parsed from.
pub struct SyntaxTree {
    grammar: Grammar,
    source: Vec<u8>,
    tree: tree_sitter::Tree,
}

impl SyntaxTree {
    /// Parse `source` with the grammar named by `grammar`.
    ///
    /// `grammar` may be an alias (`c_sharp`); it is canonicalized with the
    /// built-in alias table. `source` is text or raw bytes; bytes that are not
    /// valid UTF-8 are handed to tree-sitter as they are.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedLanguage` if no grammar is compiled in for
    /// `grammar`, or `Error::Parser` if tree-sitter fails. Syntax errors in the
    /// source are not errors; they become `ERROR` and `MISSING` nodes.
    pub fn parse(grammar: &str, source: impl AsRef<[u8]>) -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        Self::parse_with(&mut parser, grammar, source)
    }

    /// Parse with a caller-owned parser, reconfiguring its language first.
    ///
    /// # Errors
    ///
    /// Same as `SyntaxTree::parse`.
    pub fn parse_with(
        parser: &mut tree_sitter::Parser,
        grammar: &str,
        source: impl AsRef<[u8]>,
    ) -> Result<Self> {
        let canonical = LanguageResolver::builtin().canonical(grammar);
        let grammar =
            Grammar::from_id(canonical).ok_or_else(|| Error::unsupported_language(canonical))?;

        parser
            .set_language(&grammar.tree_sitter_language())
            .map_err(|e| Error::Parser(e.to_string()))?;

        let source = source.as_ref().to_vec();
        let start = Instant::now();
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| Error::Parser(format!("tree-sitter returned no tree for {grammar}")))?;

        debug!(
            %grammar,
            bytes = source.len(),
            elapsed = ?start.elapsed(),
            "Parsed source"
        );
        if tree.root_node().has_error() {
            warn!(%grammar, "Source contains syntax errors; outline includes ERROR nodes");
        }

        Ok(Self {
            grammar,
            source,
            tree,
        })
    }

    /// The grammar this tree was parsed with.
    #[must_use]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// The source bytes this tree was parsed from.
    #[must_use]
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Whether the tree contains `ERROR` or `MISSING` nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Total number of nodes, named and anonymous, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut cursor = self.tree.walk();
        let mut count = 0;
        loop {
            count += 1;
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return count;
                }
            }
        }
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("grammar", &self.grammar)
            .field("bytes", &self.source.len())
            .field("root", &self.tree.root_node().kind())
            .finish()
    }
}
