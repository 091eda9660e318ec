//! Reading literal expressions back as host values.
//!
//! The inverse of literal stringification: a subtree made only of literals,
//! array and object literals, and signed numbers evaluates to the JSON value
//! it denotes. Anything else (identifiers, calls, computed keys) has no
//! static value.

use serde_json::Map;

use crate::kind::NodeKind;
use crate::node::{json_number, Node};
use crate::value::Value;

/// Returns the host value denoted by a literal expression.
///
/// Expression statements are looked through, so the program produced by
/// parsing `42` evaluates through its first statement. The `undefined`
/// identifier evaluates to `null`.
///
/// # Examples
///
/// ```
/// use grafter_core::{literal_value, Node, NodeKind};
///
/// let literal = Node::builder(NodeKind::Literal).field("value", 42.0).build();
/// assert_eq!(literal_value(&literal), Some(serde_json::json!(42)));
///
/// let name = Node::builder(NodeKind::Identifier).field("name", "x").build();
/// assert_eq!(literal_value(&name), None);
/// ```
#[must_use]
pub fn literal_value(node: &Node) -> Option<serde_json::Value> {
    match node.kind() {
        NodeKind::Literal => scalar(&node.field("value")?),
        NodeKind::Identifier => (node.str_field("name")? == "undefined")
            .then_some(serde_json::Value::Null),
        NodeKind::ArrayExpression => node
            .list("elements")?
            .iter()
            .map(|element| match element {
                Value::Node(item) => literal_value(item),
                _ => Some(serde_json::Value::Null),
            })
            .collect::<Option<Vec<_>>>()
            .map(serde_json::Value::Array),
        NodeKind::ObjectExpression => object_value(node),
        NodeKind::UnaryExpression => signed_number(node),
        NodeKind::ExpressionStatement => literal_value(&node.child("expression")?),
        _ => None,
    }
}

fn scalar(value: &Value) -> Option<serde_json::Value> {
    match value {
        Value::Null => Some(serde_json::Value::Null),
        Value::Bool(flag) => Some(serde_json::Value::Bool(*flag)),
        Value::Number(number) => Some(json_number(*number)),
        Value::String(text) => Some(serde_json::Value::String(text.clone())),
        Value::Node(_) | Value::Array(_) => None,
    }
}

fn object_value(node: &Node) -> Option<serde_json::Value> {
    let mut object = Map::new();
    for item in node.list("properties")? {
        let property = item.as_node()?;
        if !property.is(&NodeKind::Property)
            || property.field("computed").and_then(|v| v.as_bool()) == Some(true)
        {
            return None;
        }
        let key = property_key(&property.child("key")?)?;
        let value = literal_value(&property.child("value")?)?;
        object.insert(key, value);
    }
    Some(serde_json::Value::Object(object))
}

/// Returns the name a property key spells.
///
/// Identifiers give their name; literal keys give their value as text, with
/// integral numbers written without a fraction.
#[must_use]
pub fn property_key(key: &Node) -> Option<String> {
    match key.kind() {
        NodeKind::Identifier => key.str_field("name"),
        NodeKind::Literal => match key.field("value")? {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(json_number(number).to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null => Some("null".to_owned()),
            Value::Node(_) | Value::Array(_) => None,
        },
        _ => None,
    }
}

fn signed_number(node: &Node) -> Option<serde_json::Value> {
    let operator = node.str_field("operator")?;
    let argument = literal_value(&node.child("argument")?)?;
    let number = argument.as_f64()?;
    match operator.as_str() {
        #[expect(clippy::float_arithmetic, reason = "negating a numeric literal")]
        "-" => Some(json_number(-number)),
        "+" => Some(json_number(number)),
        _ => None,
    }
}
