//! Field values of tree nodes.

use crate::node::Node;

/// The value of a node field.
///
/// Compound values are either child nodes or arrays; everything else is a
/// scalar. Cloning a value is shallow: child nodes are shared handles.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JavaScript `null`, or an absent optional child.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(f64),
    /// A string scalar.
    String(String),
    /// A child node.
    Node(Node),
    /// An ordered list of values.
    Array(Vec<Value>),
}

impl Value {
    /// Returns the child node, if this value is one.
    #[must_use]
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the string scalar, if this value is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric scalar, if this value is one.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean scalar, if this value is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the array items, if this value is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns whether this value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the JavaScript truthiness of this value.
    ///
    /// `null`, `false`, `0`, `NaN`, and the empty string are falsy; nodes and
    /// arrays are always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Node(_) | Self::Array(_) => true,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(items)
    }
}

impl From<Option<Node>> for Value {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Self::Null, Self::Node)
    }
}
