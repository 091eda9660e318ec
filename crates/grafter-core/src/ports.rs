//! Seams to the external parser, printer, and literal stringifier.
//!
//! The engine never parses or prints source itself; it delegates through
//! these traits. `grafter-syntax` provides the default implementations and
//! tests substitute their own.

use crate::config::{PrintOptions, StringifyOptions};
use crate::error::{GraftError, ParseError};
use crate::node::Node;

/// Parses source text into a tree whose root is a `Program`.
pub trait SourceParser {
    /// Parses `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first syntax problem.
    fn parse(&self, text: &str) -> Result<Node, ParseError>;
}

/// Prints a tree back to source text.
pub trait SourcePrinter {
    /// Prints the tree below `root`.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Print`] when the tree cannot be rendered.
    fn print(&self, root: &Node, options: &PrintOptions) -> Result<String, GraftError>;
}

/// Renders host values as literal expression source text.
pub trait LiteralStringifier {
    /// Renders `value`.
    ///
    /// The empty string means the value has no literal form.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Conversion`] when rendering fails.
    fn stringify(
        &self,
        value: &serde_json::Value,
        options: &StringifyOptions,
    ) -> Result<String, GraftError>;
}
