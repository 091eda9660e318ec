//! Predicate search over an index.
//!
//! [`search`] indexes the tree below a root and evaluates a predicate against
//! every entry in discovery order, collecting the original nodes whose
//! predicate result is truthy.

use tracing::debug;

use crate::config::SearchOptions;
use crate::error::{GraftError, PredicateError};
use crate::index::{Index, IndexEntry};
use crate::node::Node;
use crate::value::Value;

const SEARCH_TARGET: &str = "grafter::search";

/// Outcome of evaluating a predicate against one entry.
///
/// A predicate may answer with anything truthy-like; an `Err` reports a
/// failed evaluation.
pub trait Truthy {
    /// Reduces the outcome to a match decision.
    ///
    /// # Errors
    ///
    /// Returns the predicate's own error when evaluation failed.
    fn truthiness(self) -> Result<bool, PredicateError>;
}

impl Truthy for bool {
    fn truthiness(self) -> Result<bool, PredicateError> {
        Ok(self)
    }
}

impl<T> Truthy for Option<T> {
    fn truthiness(self) -> Result<bool, PredicateError> {
        Ok(self.is_some())
    }
}

impl Truthy for Value {
    fn truthiness(self) -> Result<bool, PredicateError> {
        Ok(self.is_truthy())
    }
}

impl<T, E> Truthy for Result<T, E>
where
    T: Truthy,
    E: Into<PredicateError>,
{
    fn truthiness(self) -> Result<bool, PredicateError> {
        match self {
            Ok(outcome) => outcome.truthiness(),
            Err(error) => Err(error.into()),
        }
    }
}

/// Searches the tree below `root` for nodes satisfying `predicate`.
///
/// The predicate receives each entry and the entry of its parent (absent for
/// the root). Results are the original nodes in pre-order.
///
/// # Errors
///
/// Returns [`GraftError::NoTree`] when `root` is `None`, and
/// [`GraftError::Predicate`] when the predicate fails while
/// [`SearchOptions::throw_errors`] is set. Without that option failures are
/// logged and the entry counts as non-matching.
///
/// # Examples
///
/// ```
/// use grafter_core::{search, Node, NodeKind, SearchOptions};
///
/// let literal = Node::builder(NodeKind::Literal).field("value", 1.0).build();
/// let root = Node::builder(NodeKind::ExpressionStatement)
///     .field("expression", literal.clone())
///     .build();
///
/// let found = search(Some(&root), &SearchOptions::default(), |entry, _| {
///     entry.is("Literal")
/// })?;
/// assert_eq!(found, vec![literal]);
/// # Ok::<(), grafter_core::GraftError>(())
/// ```
pub fn search<F, R>(
    root: Option<&Node>,
    options: &SearchOptions,
    mut predicate: F,
) -> Result<Vec<Node>, GraftError>
where
    F: FnMut(&IndexEntry, Option<&IndexEntry>) -> R,
    R: Truthy,
{
    let index = Index::build(root.ok_or(GraftError::NoTree)?);

    let mut matches = Vec::new();
    for entry in index.entries() {
        match predicate(entry, entry.parent()).truthiness() {
            Ok(true) => matches.push(entry.node().clone()),
            Ok(false) => {}
            Err(source) if options.throw_errors() => {
                return Err(GraftError::predicate(
                    entry.position(),
                    entry.kind().clone(),
                    source,
                ));
            }
            Err(source) => {
                debug!(
                    target: SEARCH_TARGET,
                    position = entry.position(),
                    kind = %entry.kind(),
                    error = %source,
                    "predicate failed; treating entry as non-matching"
                );
            }
        }
    }

    debug!(
        target: SEARCH_TARGET,
        indexed = index.len(),
        matched = matches.len(),
        "search finished"
    );
    Ok(matches)
}
