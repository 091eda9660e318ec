//! Hand-written port fakes and tree builders.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    EngineConfig, GraftError, Index, LiteralStringifier, Node, NodeKind, ParseError, PrintOptions,
    SourceParser, SourcePrinter, StringifyOptions, Value,
};

/// Source texts seen by a [`ScriptedParser`], in call order.
pub(super) type Calls = Rc<RefCell<Vec<String>>>;

/// A parser answering every call through a closure.
pub(super) struct ScriptedParser {
    calls: Calls,
    respond: Box<dyn Fn(&str) -> Result<Node, ParseError>>,
}

impl ScriptedParser {
    pub(super) fn new(respond: impl Fn(&str) -> Result<Node, ParseError> + 'static) -> (Self, Calls) {
        let calls = Calls::default();
        let parser = Self {
            calls: Rc::clone(&calls),
            respond: Box::new(respond),
        };
        (parser, calls)
    }
}

impl SourceParser for ScriptedParser {
    fn parse(&self, text: &str) -> Result<Node, ParseError> {
        self.calls.borrow_mut().push(text.to_owned());
        (self.respond)(text)
    }
}

/// Prints the kinds of every indexed node in pre-order.
pub(super) struct OutlinePrinter;

impl SourcePrinter for OutlinePrinter {
    fn print(&self, root: &Node, _options: &PrintOptions) -> Result<String, GraftError> {
        let kinds: Vec<String> = Index::build(root)
            .entries()
            .map(|entry| entry.kind().to_string())
            .collect();
        Ok(kinds.join(" "))
    }
}

/// Compact JSON rendering that records the indent it was asked for.
#[derive(Default)]
pub(super) struct RecordingStringifier {
    pub(super) indents: Rc<RefCell<Vec<usize>>>,
}

impl LiteralStringifier for RecordingStringifier {
    fn stringify(
        &self,
        value: &serde_json::Value,
        options: &StringifyOptions,
    ) -> Result<String, GraftError> {
        self.indents.borrow_mut().push(options.indent());
        serde_json::to_string(value).map_err(|err| GraftError::conversion(err.to_string()))
    }
}

/// Builds an engine over a scripted parser and the other fakes.
pub(super) fn scripted_engine(
    respond: impl Fn(&str) -> Result<Node, ParseError> + 'static,
) -> (crate::Engine, Calls) {
    let (parser, calls) = ScriptedParser::new(respond);
    let engine = crate::Engine::with_ports(
        parser,
        OutlinePrinter,
        RecordingStringifier::default(),
        EngineConfig::default(),
    );
    (engine, calls)
}

pub(super) fn program(statements: Vec<Node>) -> Node {
    Node::builder(NodeKind::Program)
        .field(
            "body",
            statements.into_iter().map(Value::from).collect::<Vec<_>>(),
        )
        .build()
}

pub(super) fn statement(expression: Node) -> Node {
    Node::builder(NodeKind::ExpressionStatement)
        .field("expression", expression)
        .build()
}

pub(super) fn first_statement(tree: &Node) -> Node {
    tree.list("body")
        .and_then(|body| body.first().and_then(Value::as_node).cloned())
        .expect("first statement")
}
