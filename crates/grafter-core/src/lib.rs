//! Core tree model, index, and search for the Grafter tree editor.
//!
//! This crate provides the types shared by every part of the Grafter
//! pipeline: shared mutable tree nodes, the flat pre-order index built for a
//! search, predicate evaluation, selectors, literal evaluation, engine
//! options, and the port traits through which parsing, printing, and literal
//! stringification are delegated. It is re-exported by the `grafter` facade
//! crate for stable public consumption.
//!
//! # Core types
//!
//! - [`Node`] and [`Value`] - shared tree nodes and their field values
//! - [`NodeKind`] - the ESTree `type` tag
//! - [`Origin`] and [`ListLayout`] - where a parsed node came from
//! - [`Index`] and [`IndexEntry`] - the per-search node snapshot
//! - [`search`] and [`Selector`] - predicate search
//! - [`EngineConfig`] - search, stringify, and print options
//! - [`GraftError`] and [`ParseError`] - structured errors
//!
//! # Example
//!
//! ```
//! use grafter_core::{search, Node, NodeKind, SearchOptions, Selector};
//!
//! let id = Node::builder(NodeKind::Identifier).field("name", "main").build();
//! let function = Node::builder(NodeKind::FunctionDeclaration)
//!     .field("id", id)
//!     .build();
//!
//! let selector = Selector::parse("FunctionDeclaration[id.name=main]")?;
//! let found = search(Some(&function), &SearchOptions::default(), |entry, _| {
//!     selector.matches(entry)
//! })?;
//! assert_eq!(found.len(), 1);
//! # Ok::<(), grafter_core::GraftError>(())
//! ```

mod config;
mod error;
mod index;
mod kind;
mod literal;
mod node;
mod origin;
mod ports;
mod search;
mod selector;
mod value;

pub use config::{EngineConfig, PrintOptions, Replacer, SearchOptions, StringifyOptions};
pub use error::{GraftError, ParseError, ParseErrorKind, PredicateError};
pub use index::{Index, IndexEntry};
pub use kind::NodeKind;
pub use literal::{literal_value, property_key};
pub use node::{Node, NodeBuilder, NodeId};
pub use origin::{ListLayout, ListSeparator, Origin};
pub use ports::{LiteralStringifier, SourcePrinter, SourceParser};
pub use search::{search, Truthy};
pub use selector::Selector;
pub use value::Value;

#[cfg(test)]
mod tests;
