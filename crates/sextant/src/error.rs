//! Error types for Sextant operations.
//!
//! Errors fall into two groups, following a 4xx/5xx style split:
//!
//! - **Input problems**: the file name maps to no grammar (`UnknownLanguage`), or
//!   it maps to a grammar that has no compiled-in parser (`UnsupportedLanguage`).
//!   Callers are expected to surface these to the user and carry on.
//! - **Infrastructure problems**: I/O, configuration, and tree-sitter failures.
//!
//! Syntactically invalid source is never an error. Tree-sitter produces `ERROR`
//! and `MISSING` nodes for what it cannot parse, and those are outlined like any
//! other node.

use thiserror::Error;

/// Result type for Sextant operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Sextant operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither the file name nor its extension maps to a grammar.
    #[error("unknown language for file: {file_name}")]
    UnknownLanguage {
        /// The file name that could not be resolved
        file_name: String,
    },

    /// The grammar id is known but no parser is compiled in for it.
    #[error("unsupported language: {grammar}")]
    UnsupportedLanguage {
        /// Canonical grammar id that has no registered parser
        grammar: String,
    },

    /// Tree-sitter parsing infrastructure failed
    #[error("parser error: {0}")]
    Parser(String),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("configuration error: {0}")]
    Config(String),

    /// Outline could not be written as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown-language error for a file name.
    #[must_use]
    pub fn unknown_language(file_name: impl Into<String>) -> Self {
        Self::UnknownLanguage {
            file_name: file_name.into(),
        }
    }

    /// Create an unsupported-language error for a grammar id.
    #[must_use]
    pub fn unsupported_language(grammar: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            grammar: grammar.into(),
        }
    }

    /// Returns `true` if this is a language resolution problem (4xx-style).
    ///
    /// These are reported to the user rather than treated as failures of the tool.
    #[must_use]
    pub fn is_language_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownLanguage { .. } | Self::UnsupportedLanguage { .. }
        )
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_errors_are_categorized_as_input_problems() {
        assert!(Error::unknown_language("notes.unknown").is_language_error());
        assert!(Error::unsupported_language("ruby").is_language_error());
        assert!(!Error::Parser("incompatible ABI".to_string()).is_language_error());
        assert!(!Error::Config("bad yaml".to_string()).is_language_error());
    }

    #[test]
    fn unknown_language_display_names_the_file() {
        let error = Error::unknown_language("test.unknown");

        assert_eq!(error.to_string(), "unknown language for file: test.unknown");
    }

    #[test]
    fn unsupported_language_display_names_the_grammar() {
        let error = Error::unsupported_language("haskell");

        assert!(error.to_string().contains("haskell"));
    }
}
