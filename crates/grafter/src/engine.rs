//! The [`Engine`]: injected ports, configuration, and parse recovery.
//!
//! Every tree operation in the facade goes through an engine. It owns the
//! parser, printer, and literal stringifier ports and the
//! [`EngineConfig`], and is shared cheaply by every [`Collection`] it
//! produces.

use std::fmt;
use std::rc::Rc;

use grafter_core::{
    EngineConfig, GraftError, LiteralStringifier, Node, ParseError, SourceParser, SourcePrinter,
    Value,
};
use grafter_syntax::{Dialect, EstreeParser, JsonStringifier, Reprinter};
use tracing::debug;

use crate::collection::Collection;
use crate::source::Source;

const ENGINE_TARGET: &str = "grafter::engine";

struct Ports {
    parser: Box<dyn SourceParser>,
    printer: Box<dyn SourcePrinter>,
    stringifier: Box<dyn LiteralStringifier>,
    config: EngineConfig,
}

/// Parses, converts, and prints trees through injected ports.
///
/// Cloning an engine is cheap; clones share the same ports.
///
/// # Example
///
/// ```
/// use grafter::Engine;
///
/// let engine = Engine::default();
/// let tree = engine.load("const x = {and: \"desert\"};")?;
/// let objects = tree.select("ObjectExpression")?;
/// assert!(objects.set_prop("desert", &"you".into())?);
/// assert_eq!(
///     tree.print()?,
///     "const x = {and: \"desert\", \"desert\": \"you\"};"
/// );
/// # Ok::<(), grafter::GraftError>(())
/// ```
#[derive(Clone)]
pub struct Engine {
    ports: Rc<Ports>,
}

impl Engine {
    /// Creates an engine using the bundled JavaScript ports.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::for_dialect(Dialect::default(), config)
    }

    /// Creates an engine using the bundled ports for `dialect`.
    #[must_use]
    pub fn for_dialect(dialect: Dialect, config: EngineConfig) -> Self {
        Self::with_ports(
            EstreeParser::new(dialect),
            Reprinter::new(),
            JsonStringifier::new(),
            config,
        )
    }

    /// Creates an engine from caller-supplied ports.
    #[must_use]
    pub fn with_ports(
        parser: impl SourceParser + 'static,
        printer: impl SourcePrinter + 'static,
        stringifier: impl LiteralStringifier + 'static,
        config: EngineConfig,
    ) -> Self {
        Self {
            ports: Rc::new(Ports {
                parser: Box::new(parser),
                printer: Box::new(printer),
                stringifier: Box::new(stringifier),
                config,
            }),
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.ports.config
    }

    /// Parses source text into a tree.
    ///
    /// When the parser reports an unexpected token, the text is parsed again
    /// wrapped in parentheses, which admits bare function and class
    /// expressions. A recovered first expression is re-tagged with its
    /// declaration kind (`FunctionExpression` becomes `FunctionDeclaration`).
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Parse`] with the original failure when the text
    /// does not parse, with or without the parentheses.
    pub fn parse(&self, text: &str) -> Result<Node, GraftError> {
        match self.ports.parser.parse(text) {
            Ok(tree) => Ok(tree),
            Err(error) if error.is_unexpected_token() => self.recover(text, error),
            Err(error) => Err(error.into()),
        }
    }

    fn recover(&self, text: &str, error: ParseError) -> Result<Node, GraftError> {
        let wrapped = format!("({text})");
        let Ok(tree) = self.ports.parser.parse(&wrapped) else {
            debug!(
                target: ENGINE_TARGET,
                error = %error,
                "parenthesised retry failed; reporting the original error"
            );
            return Err(error.into());
        };
        let retag = tree
            .list("body")
            .and_then(|body| body.first().and_then(Value::as_node).cloned())
            .and_then(|statement| statement.child("expression"))
            .and_then(|node| {
                let declaration = node.kind().declaration_counterpart()?;
                Some((node, declaration))
            });
        if let Some((node, declaration)) = retag {
            debug!(
                target: ENGINE_TARGET,
                from = %node.kind(),
                to = %declaration,
                "recovered bare expression as a declaration"
            );
            node.set_kind(declaration);
        }
        Ok(tree)
    }

    /// Converts a host value to literal source text.
    ///
    /// `null` converts to the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Conversion`] when the stringifier fails.
    pub fn value_to_text(&self, value: &serde_json::Value) -> Result<String, GraftError> {
        if value.is_null() {
            return Ok(String::new());
        }
        self.ports
            .stringifier
            .stringify(value, self.ports.config.stringify())
    }

    /// Returns the source text for `source`, stringifying values.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Conversion`] when a value cannot be stringified.
    pub fn source_text(&self, source: &Source) -> Result<String, GraftError> {
        match source {
            Source::Text(text) => Ok(text.clone()),
            Source::Value(value) => self.value_to_text(value),
        }
    }

    /// Parses `source` into a single-root collection.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Parse`] or [`GraftError::Conversion`] when the
    /// source cannot be turned into a tree.
    pub fn load(&self, source: impl Into<Source>) -> Result<Collection, GraftError> {
        let text = self.source_text(&source.into())?;
        let tree = self.parse(&text)?;
        debug!(target: ENGINE_TARGET, bytes = text.len(), "loaded tree");
        Ok(self.collection(vec![tree]))
    }

    /// Wraps existing nodes in a collection bound to this engine.
    #[must_use]
    pub fn collection(&self, roots: Vec<Node>) -> Collection {
        Collection::new(self.clone(), roots)
    }

    /// Parses `text` and returns its top-level statements.
    pub(crate) fn fragment(&self, text: &str) -> Result<Vec<Value>, GraftError> {
        let tree = self.parse(text)?;
        Ok(tree.list("body").unwrap_or_default())
    }

    /// Prints the tree below `root` with the configured print options.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Print`] when the printer cannot render the tree.
    pub fn print(&self, root: &Node) -> Result<String, GraftError> {
        self.ports.printer.print(root, self.ports.config.print())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.ports.config)
            .finish_non_exhaustive()
    }
}
