//! Grafter: search and edit JavaScript syntax trees, then print them back.
//!
//! This facade crate re-exports the stable types from [`grafter_core`] and
//! [`grafter_syntax`] and provides the [`Engine`] and [`Collection`]
//! entrypoints. An engine parses source through its parser port; the
//! resulting collection can be searched with predicates or selectors, have
//! statements spliced into `body` lists and properties written into object
//! literals, and be printed back to source text.
//!
//! # Stability
//!
//! The `grafter` crate is the semver-stable entrypoint. `grafter_core` and
//! `grafter_syntax` may evolve, but this facade preserves type names and
//! method behaviour.
//!
//! # Core types
//!
//! - [`Engine`] - injected ports, configuration, and parse recovery
//! - [`Collection`] - ordered roots with search, splice, and print
//! - [`Source`] - source text or a host value to convert
//! - [`PropertyMatcher`] - selects properties to remove
//! - [`Node`], [`NodeKind`], and [`Value`] - the tree model
//! - [`EngineConfig`] - search, stringify, and print options
//! - [`GraftError`] - structured errors
//!
//! # Example
//!
//! ```
//! use grafter::Engine;
//!
//! let engine = Engine::default();
//! let tree = engine.load("function main() {\n  start();\n}\n")?;
//!
//! let main = tree.select("FunctionDeclaration[id.name=main]")?;
//! assert!(main.append("finish();")?);
//! assert_eq!(tree.print()?, "function main() {\n  start();\n  finish();\n}\n");
//! # Ok::<(), grafter::GraftError>(())
//! ```

mod body;
mod collection;
mod engine;
mod props;
mod source;

pub use grafter_core::{
    literal_value, property_key, search, EngineConfig, GraftError, Index, IndexEntry,
    ListLayout, ListSeparator, LiteralStringifier, Node, NodeBuilder, NodeId, NodeKind, Origin,
    ParseError, ParseErrorKind, PredicateError, PrintOptions, Replacer, SearchOptions, Selector,
    SourceParser, SourcePrinter, StringifyOptions, Truthy, Value,
};
pub use grafter_syntax::{Dialect, DialectParseError, EstreeParser, JsonStringifier, Reprinter};

pub use collection::Collection;
pub use engine::Engine;
pub use props::PropertyMatcher;
pub use source::Source;

#[cfg(test)]
mod tests;
