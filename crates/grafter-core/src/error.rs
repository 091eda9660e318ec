//! Error types for tree operations.
//!
//! This module provides structured error types for every fallible operation in
//! the Grafter workspace: parsing through a parser port, searching, literal
//! conversion, and printing.

use thiserror::Error;

use crate::kind::NodeKind;

/// Boxed error raised by user predicate code.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The parser met a token it could not place in the grammar.
    UnexpectedToken,
    /// Any other parse failure (missing tokens, parser initialisation, ...).
    Other,
}

/// A parse failure reported by a [`SourceParser`](crate::SourceParser).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    line: u32,
    column: u32,
}

impl ParseError {
    /// Creates a parse error of the given kind at a one-based position.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    /// Creates an unexpected-token parse error.
    #[must_use]
    pub fn unexpected_token(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken, message, line, column)
    }

    /// Creates a parse error that is not an unexpected token.
    #[must_use]
    pub fn other(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ParseErrorKind::Other, message, line, column)
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the failure description without position.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the one-based line of the failure.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the one-based column of the failure.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns whether the failure is an unexpected token.
    ///
    /// Parsers that only report a message are recognised by the message
    /// containing "unexpected token" in any letter case.
    #[must_use]
    pub fn is_unexpected_token(&self) -> bool {
        self.kind == ParseErrorKind::UnexpectedToken
            || self
                .message
                .to_ascii_lowercase()
                .contains("unexpected token")
    }
}

/// Errors from tree operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraftError {
    /// The parser port rejected the source text.
    #[error("failed to parse source: {0}")]
    Parse(#[from] ParseError),

    /// A search or print was attempted without a tree.
    #[error("no syntax tree to operate on")]
    NoTree,

    /// A predicate could not be built from its description.
    #[error("invalid predicate: {message}")]
    InvalidPredicate {
        /// Description of the problem.
        message: String,
    },

    /// A predicate failed while `throw_errors` was requested.
    #[error("predicate failed on entry {position} ({kind}): {source}")]
    Predicate {
        /// Discovery position of the entry being evaluated.
        position: usize,
        /// Kind of the node being evaluated.
        kind: NodeKind,
        /// The error raised by the predicate.
        #[source]
        source: PredicateError,
    },

    /// A host value could not be turned into a literal expression.
    #[error("literal conversion failed: {message}")]
    Conversion {
        /// Description of the failure.
        message: String,
    },

    /// A configuration document could not be loaded.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// A tree could not be printed.
    #[error("print failed: {message}")]
    Print {
        /// Description of the failure.
        message: String,
    },
}

impl GraftError {
    /// Creates an invalid predicate error.
    #[must_use]
    pub fn invalid_predicate(message: impl Into<String>) -> Self {
        Self::InvalidPredicate {
            message: message.into(),
        }
    }

    /// Creates a predicate evaluation error.
    #[must_use]
    pub fn predicate(position: usize, kind: NodeKind, source: PredicateError) -> Self {
        Self::Predicate {
            position,
            kind,
            source,
        }
    }

    /// Creates a literal conversion error.
    #[must_use]
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a print error.
    #[must_use]
    pub fn print(message: impl Into<String>) -> Self {
        Self::Print {
            message: message.into(),
        }
    }
}
