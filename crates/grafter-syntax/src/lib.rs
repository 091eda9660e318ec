//! Default parser, printer, and stringifier ports for Grafter.
//!
//! This crate provides the adapters the `grafter` engine uses unless told
//! otherwise:
//!
//! - **Parsing** via [`EstreeParser`], which runs Tree-sitter and lowers the
//!   concrete syntax tree to ESTree-shaped [`grafter_core::Node`]s
//! - **Printing** via [`Reprinter`], which reproduces untouched source text
//!   verbatim and re-renders only the lists that were edited
//! - **Literal conversion** via [`JsonStringifier`], which renders host
//!   values the way `JSON.stringify` does
//!
//! # Supported Dialects
//!
//! - JavaScript, including JSX (`.js`, `.mjs`, `.cjs`, `.jsx`)
//! - TypeScript (`.ts`, `.mts`, `.cts`)
//! - TSX (`.tsx`)
//!
//! # Example
//!
//! ```
//! use grafter_core::{PrintOptions, SourceParser, SourcePrinter};
//! use grafter_syntax::{EstreeParser, Reprinter};
//!
//! let tree = EstreeParser::default().parse("a();\n")?;
//! let extra = EstreeParser::default().parse("b();")?;
//! let statements = extra.list("body").unwrap_or_default();
//! tree.insert_items("body", 1, statements);
//!
//! let printed = Reprinter::new().print(&tree, &PrintOptions::default())?;
//! assert_eq!(printed, "a();\nb();\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod language;
mod lower;
mod parser;
mod position;
mod printer;
mod stringify;

pub use language::{Dialect, DialectParseError};
pub use parser::EstreeParser;
pub use printer::Reprinter;
pub use stringify::JsonStringifier;

#[cfg(test)]
mod tests;
