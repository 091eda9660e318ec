//! Ordered sets of tree roots and operations fanned out over them.

use std::slice;

use grafter_core::{search, GraftError, IndexEntry, Node, SearchOptions, Selector, Truthy};
use tracing::debug;

use crate::engine::Engine;

const SEARCH_TARGET: &str = "grafter::search";

/// An ordered set of nodes bound to an [`Engine`].
///
/// Loading source yields a one-root collection; searching yields a
/// collection of the matched nodes, which can be searched, edited, or
/// printed in turn. Every operation applies to each root in order.
#[derive(Debug, Clone)]
pub struct Collection {
    engine: Engine,
    roots: Vec<Node>,
}

impl Collection {
    pub(crate) const fn new(engine: Engine, roots: Vec<Node>) -> Self {
        Self { engine, roots }
    }

    /// Returns the engine this collection is bound to.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the number of roots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns whether the collection has no roots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the roots in order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.roots
    }

    /// Iterates over the roots.
    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.roots.iter()
    }

    /// Returns the first root.
    #[must_use]
    pub fn first(&self) -> Option<&Node> {
        self.roots.first()
    }

    /// Returns the root at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Node> {
        self.roots.get(position)
    }

    /// Consumes the collection, returning its roots.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.roots
    }

    /// Searches below every root with the engine's search options.
    ///
    /// Results keep root order, then pre-order within each root, so an
    /// empty collection yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Predicate`] when the predicate fails with
    /// `throw_errors` set.
    pub fn search<F, R>(&self, predicate: F) -> Result<Self, GraftError>
    where
        F: FnMut(&IndexEntry, Option<&IndexEntry>) -> R,
        R: Truthy,
    {
        let options = *self.engine.config().search();
        self.search_with(&options, predicate)
    }

    /// Searches below every root with explicit options.
    ///
    /// # Errors
    ///
    /// As for [`search`](Self::search).
    pub fn search_with<F, R>(
        &self,
        options: &SearchOptions,
        mut predicate: F,
    ) -> Result<Self, GraftError>
    where
        F: FnMut(&IndexEntry, Option<&IndexEntry>) -> R,
        R: Truthy,
    {
        let mut found = Vec::new();
        for root in &self.roots {
            found.extend(search(Some(root), options, &mut predicate)?);
        }
        debug!(
            target: SEARCH_TARGET,
            roots = self.roots.len(),
            matched = found.len(),
            "collection search finished"
        );
        Ok(Self::new(self.engine.clone(), found))
    }

    /// Searches for nodes matching a selector such as
    /// `FunctionDeclaration[id.name=main]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::InvalidPredicate`] for a malformed selector and
    /// otherwise as for [`search`](Self::search).
    pub fn select(&self, selector: &str) -> Result<Self, GraftError> {
        let parsed = Selector::parse(selector)?;
        self.search(|entry, _| parsed.matches(entry))
    }

    /// Prints every root, joined by the configured line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::NoTree`] when the collection is empty and
    /// [`GraftError::Print`] when a root cannot be printed.
    pub fn print(&self) -> Result<String, GraftError> {
        if self.roots.is_empty() {
            return Err(GraftError::NoTree);
        }
        let printed = self
            .roots
            .iter()
            .map(|root| self.engine.print(root))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(printed.join(self.engine.config().print().line_terminator()))
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}
