//! Source position metadata attached to parsed nodes.
//!
//! Parsers record where each node came from so printers can reproduce
//! untouched regions verbatim. Nodes built by hand carry no origin.

use std::ops::Range;
use std::rc::Rc;

/// How the items of a list are separated in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSeparator {
    /// Items sit on their own lines (statements, class members).
    Newline,
    /// Items are separated by commas (object properties).
    Comma,
}

/// Where the items of one list field sit inside the owning node's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout {
    field: String,
    inner: Range<usize>,
    items: Vec<Range<usize>>,
    separator: ListSeparator,
    delimited: bool,
}

impl ListLayout {
    /// Creates a layout for `field`.
    ///
    /// `inner` spans the text between the list delimiters, or the whole
    /// owner when the list is not delimited (as for a program body). `items`
    /// holds the absolute range of every parsed item in order.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        inner: Range<usize>,
        items: Vec<Range<usize>>,
        separator: ListSeparator,
        delimited: bool,
    ) -> Self {
        Self {
            field: field.into(),
            inner,
            items,
            separator,
            delimited,
        }
    }

    /// Returns the list field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the absolute range between the delimiters.
    #[must_use]
    pub fn inner(&self) -> Range<usize> {
        self.inner.clone()
    }

    /// Returns the absolute ranges of the parsed items.
    #[must_use]
    pub fn items(&self) -> &[Range<usize>] {
        &self.items
    }

    /// Returns the range from the first item's start to the last item's end.
    #[must_use]
    pub fn span(&self) -> Option<Range<usize>> {
        let first = self.items.first()?;
        let last = self.items.last()?;
        Some(first.start..last.end)
    }

    /// Returns the separator style.
    #[must_use]
    pub const fn separator(&self) -> ListSeparator {
        self.separator
    }

    /// Returns whether the list sits between delimiters such as braces.
    #[must_use]
    pub const fn delimited(&self) -> bool {
        self.delimited
    }

    /// Returns whether the list was empty when parsed.
    #[must_use]
    pub fn was_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The source text and byte range a node was parsed from.
#[derive(Debug, Clone)]
pub struct Origin {
    source: Rc<str>,
    range: Range<usize>,
    lists: Vec<ListLayout>,
}

impl Origin {
    /// Creates an origin for `range` within `source`.
    #[must_use]
    pub const fn new(source: Rc<str>, range: Range<usize>) -> Self {
        Self {
            source,
            range,
            lists: Vec::new(),
        }
    }

    /// Adds the layout of one list field.
    #[must_use]
    pub fn with_list(mut self, layout: ListLayout) -> Self {
        self.lists.push(layout);
        self
    }

    /// Returns the full source text the node was parsed from.
    #[must_use]
    pub fn source(&self) -> &Rc<str> {
        &self.source
    }

    /// Returns the node's absolute byte range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the node's original text.
    ///
    /// Yields an empty string if the range does not fall on character
    /// boundaries of the source.
    #[must_use]
    pub fn text(&self) -> &str {
        self.source.get(self.range.clone()).unwrap_or_default()
    }

    /// Returns the layout recorded for `field`, if any.
    #[must_use]
    pub fn list(&self, field: &str) -> Option<&ListLayout> {
        self.lists.iter().find(|layout| layout.field == field)
    }

    /// Returns whether both origins point into the same source text.
    #[must_use]
    pub fn same_source(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }

    /// Returns whether `range` lies within this origin's range.
    #[must_use]
    pub const fn contains(&self, range: &Range<usize>) -> bool {
        range.start >= self.range.start && range.end <= self.range.end
    }
}
