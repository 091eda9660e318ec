//! Tree-sitter backed implementation of the parser port.
//!
//! [`EstreeParser`] parses JavaScript or TypeScript with Tree-sitter, rejects
//! sources containing syntax errors, and lowers the concrete syntax tree to
//! ESTree-shaped [`Node`]s.

use grafter_core::{Node, ParseError, SourceParser};
use tracing::debug;

use crate::language::Dialect;
use crate::lower::Lowerer;
use crate::position::point_to_one_based;

const PARSE_TARGET: &str = "grafter::parse";

/// Longest token text quoted in an error message.
const MAX_TOKEN_CHARS: usize = 40;

/// Parses source text into ESTree-shaped trees.
///
/// A fresh Tree-sitter parser is created for every call, so one
/// `EstreeParser` can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstreeParser {
    dialect: Dialect,
}

impl EstreeParser {
    /// Creates a parser for `dialect`.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Returns the dialect this parser accepts.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl SourceParser for EstreeParser {
    fn parse(&self, text: &str) -> Result<Node, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.dialect.tree_sitter_language())
            .map_err(|err| {
                ParseError::other(
                    format!("failed to initialise {} parser: {err}", self.dialect),
                    1,
                    1,
                )
            })?;
        let tree = parser
            .parse(text, None)
            .ok_or_else(|| ParseError::other("parsing failed", 1, 1))?;

        let root = tree.root_node();
        if let Some(error) = first_syntax_error(root, text) {
            debug!(
                target: PARSE_TARGET,
                dialect = %self.dialect,
                error = %error,
                "rejected source with syntax errors"
            );
            return Err(error);
        }

        let program = Lowerer::new(text).program(root)?;
        debug!(
            target: PARSE_TARGET,
            dialect = %self.dialect,
            bytes = text.len(),
            "parsed source"
        );
        Ok(program)
    }
}

/// Finds the first ERROR or MISSING node in document order.
///
/// ERROR nodes are reported as unexpected tokens. A MISSING node is an
/// unexpected token too, unless it sits at the end of the input.
fn first_syntax_error(root: tree_sitter::Node<'_>, text: &str) -> Option<ParseError> {
    if !root.has_error() {
        return None;
    }
    let node = find_error_node(root)?;
    let (line, column) = point_to_one_based(node.start_position());

    if node.is_missing() {
        let message = format!("missing `{}`", node.kind());
        if node.start_byte() >= text.trim_end().len() {
            return Some(ParseError::other(
                format!("unexpected end of input, {message}"),
                line,
                column,
            ));
        }
        return Some(ParseError::unexpected_token(message, line, column));
    }

    let token = first_leaf(node);
    let snippet = text.get(token.byte_range()).unwrap_or_default();
    let message = if snippet.is_empty() {
        "unexpected token".to_owned()
    } else {
        format!("unexpected token `{}`", truncate(snippet))
    };
    Some(ParseError::unexpected_token(message, line, column))
}

fn find_error_node(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(find_error_node)
}

fn first_leaf(node: tree_sitter::Node<'_>) -> tree_sitter::Node<'_> {
    let mut current = node;
    loop {
        let mut cursor = current.walk();
        if !cursor.goto_first_child() {
            return current;
        }
        current = cursor.node();
    }
}

fn truncate(snippet: &str) -> String {
    let first_line = snippet.lines().next().unwrap_or_default();
    if first_line.chars().count() > MAX_TOKEN_CHARS {
        let kept: String = first_line.chars().take(MAX_TOKEN_CHARS).collect();
        format!("{kept}...")
    } else {
        first_line.to_owned()
    }
}
