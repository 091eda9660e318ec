//! Source dialect detection and Tree-sitter grammar selection.
//!
//! This module provides the [`Dialect`] enum for identifying the flavour of
//! JavaScript being parsed and mapping it to a Tree-sitter grammar.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Source dialects understood by [`EstreeParser`](crate::EstreeParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// JavaScript, including JSX (`.js`, `.mjs`, `.cjs`, `.jsx`).
    #[default]
    JavaScript,
    /// TypeScript without JSX (`.ts`, `.mts`, `.cts`).
    TypeScript,
    /// TypeScript with JSX (`.tsx`).
    Tsx,
}

impl Dialect {
    /// Detects the dialect from a file extension.
    ///
    /// Returns `None` if the extension is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use grafter_syntax::Dialect;
    ///
    /// assert_eq!(Dialect::from_extension("mjs"), Some(Dialect::JavaScript));
    /// assert_eq!(Dialect::from_extension("json"), None);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let normalised = ext.to_ascii_lowercase();
        match normalised.as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    /// Detects the dialect from a file path by examining its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the Tree-sitter grammar for this dialect.
    ///
    /// The TSX grammar is a superset of JavaScript with JSX, so it serves
    /// both. Plain TypeScript needs its own grammar because `<T>expr` casts
    /// conflict with JSX.
    #[must_use]
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Self::JavaScript | Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Returns the lower-case identifier for this dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    /// Returns all dialects.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::JavaScript, Self::TypeScript, Self::Tsx]
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a dialect identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported dialect: '{0}'")]
pub struct DialectParseError(String);

impl DialectParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            other => Err(DialectParseError(other.to_owned())),
        }
    }
}
