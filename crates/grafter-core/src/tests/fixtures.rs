//! Hand-built trees shared by the unit tests.

use rstest::fixture;

use crate::{Node, NodeKind, Value};

pub(super) fn identifier(name: &str) -> Node {
    Node::builder(NodeKind::Identifier).field("name", name).build()
}

pub(super) fn literal(value: impl Into<Value>) -> Node {
    Node::builder(NodeKind::Literal).field("value", value).build()
}

pub(super) fn property(key: &str, value: Node) -> Node {
    Node::builder(NodeKind::Property)
        .field("key", identifier(key))
        .field("value", value)
        .field("kind", "init")
        .field("computed", false)
        .field("shorthand", false)
        .build()
}

pub(super) fn object(properties: Vec<Node>) -> Node {
    Node::builder(NodeKind::ObjectExpression)
        .field(
            "properties",
            properties.into_iter().map(Value::from).collect::<Vec<_>>(),
        )
        .build()
}

pub(super) fn statement(expression: Node) -> Node {
    Node::builder(NodeKind::ExpressionStatement)
        .field("expression", expression)
        .build()
}

pub(super) fn program(body: Vec<Node>) -> Node {
    Node::builder(NodeKind::Program)
        .field("body", body.into_iter().map(Value::from).collect::<Vec<_>>())
        .field("sourceType", "script")
        .build()
}

/// `({ and: "desert" }); function main() { return 1; }`
///
/// Eleven distinct nodes, in pre-order:
/// `Program`, `ExpressionStatement`, `ObjectExpression`, `Property`,
/// `Identifier(and)`, `Literal(desert)`, `FunctionDeclaration`,
/// `Identifier(main)`, `BlockStatement`, `ReturnStatement`, `Literal(1)`.
#[fixture]
pub(super) fn sample_program() -> Node {
    let returned = Node::builder(NodeKind::ReturnStatement)
        .field("argument", literal(1.0))
        .build();
    let block = Node::builder(NodeKind::BlockStatement)
        .field("body", vec![Value::from(returned)])
        .build();
    let function = Node::builder(NodeKind::FunctionDeclaration)
        .field("id", identifier("main"))
        .field("params", Vec::<Value>::new())
        .field("body", block)
        .field("async", false)
        .field("generator", false)
        .build();
    program(vec![
        statement(object(vec![property("and", literal("desert"))])),
        function,
    ])
}
