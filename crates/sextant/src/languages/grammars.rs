//! Compiled-in tree-sitter grammars.
//!
//! The resolver can name far more grammars than are linked into the binary.
//! This registry is the authority on which canonical grammar ids can actually be
//! parsed; anything else fails with `UnsupportedLanguage`.
//!
//! ## Adding a New Grammar
//!
//! 1. Add the grammar crate to `Cargo.toml`
//! 2. Add a variant to `Grammar`
//! 3. Map it in `from_id`, `as_str` and `tree_sitter_language`

use serde::{Deserialize, Serialize};

/// A grammar with a parser compiled into this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// C and C++ source files
    Cpp,
    /// C# source files
    CSharp,
    /// Go source files
    Go,
    /// Java source files
    Java,
    /// JavaScript source files
    JavaScript,
    /// JSON documents
    Json,
    /// Python source files
    Python,
    /// Rust source files
    Rust,
    /// TSX source files
    Tsx,
    /// TypeScript source files
    TypeScript,
}

impl Grammar {
    /// Every compiled-in grammar, ordered by id.
    pub const ALL: [Self; 10] = [
        Self::Cpp,
        Self::CSharp,
        Self::Go,
        Self::Java,
        Self::JavaScript,
        Self::Json,
        Self::Python,
        Self::Rust,
        Self::Tsx,
        Self::TypeScript,
    ];

    /// Look up a grammar by its canonical id.
    ///
    /// Aliases are not applied here; see `LanguageResolver::canonical`.
    #[must_use]
    pub fn from_id(grammar: &str) -> Option<Self> {
        match grammar {
            "cpp" => Some(Self::Cpp),
            "csharp" => Some(Self::CSharp),
            "go" => Some(Self::Go),
            "java" => Some(Self::Java),
            "javascript" => Some(Self::JavaScript),
            "json" => Some(Self::Json),
            "python" => Some(Self::Python),
            "rust" => Some(Self::Rust),
            "tsx" => Some(Self::Tsx),
            "typescript" => Some(Self::TypeScript),
            _ => None,
        }
    }

    /// Canonical grammar id.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Json => "json",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Tsx => "tsx",
            Self::TypeScript => "typescript",
        }
    }

    /// The tree-sitter language used to parse this grammar.
    #[must_use]
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        match self {
            Self::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Self::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Java => tree_sitter_java::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Json => tree_sitter_json::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical ids of every compiled-in grammar, sorted.
#[must_use]
pub fn supported() -> Vec<&'static str> {
    Grammar::ALL.iter().map(Grammar::as_str).collect()
}
