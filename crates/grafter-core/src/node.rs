//! Shared, mutable tree nodes.
//!
//! A [`Node`] is a cheap handle to a compound value with a [`NodeKind`] tag
//! and ordered named fields. Handles compare by identity: two handles are
//! equal only when they point at the same node. Trees are mutated in place
//! through the list operations on [`Node`], which record the modified field
//! so printers know what to re-render.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Number};

use crate::kind::NodeKind;
use crate::origin::Origin;
use crate::value::Value;

/// Identity of a node, stable for as long as the node is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    fields: Vec<(String, Value)>,
    origin: Option<Origin>,
    modified: Vec<String>,
}

/// Handle to a tree node.
#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a node of `kind` with no fields.
    #[must_use]
    pub fn new(kind: impl Into<NodeKind>) -> Self {
        Self::builder(kind).build()
    }

    /// Starts building a node of `kind`.
    #[must_use]
    pub fn builder(kind: impl Into<NodeKind>) -> NodeBuilder {
        NodeBuilder {
            kind: kind.into(),
            fields: Vec::new(),
            origin: None,
        }
    }

    /// Returns the identity of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.inner).addr())
    }

    /// Returns whether both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the node's `type` tag.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.inner.borrow().kind.clone()
    }

    /// Returns whether the node's `type` tag is `kind`.
    #[must_use]
    pub fn is(&self, kind: &NodeKind) -> bool {
        self.inner.borrow().kind == *kind
    }

    /// Replaces the node's `type` tag.
    ///
    /// Re-tagging does not change the node's source text, so it is not
    /// recorded as a modification.
    pub fn set_kind(&self, kind: impl Into<NodeKind>) {
        self.inner.borrow_mut().kind = kind.into();
    }

    /// Returns a shallow copy of the field named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Value> {
        self.inner
            .borrow()
            .fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
    }

    /// Returns the child node stored in field `name`, if any.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<Self> {
        match self.field(name)? {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the string scalar stored in field `name`, if any.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns a shallow copy of all fields in their natural order.
    #[must_use]
    pub fn fields(&self) -> Vec<(String, Value)> {
        self.inner.borrow().fields.clone()
    }

    /// Returns the field names in their natural order.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.inner
            .borrow()
            .fields
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Returns the direct child nodes, looking through arrays.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        let mut children = Vec::new();
        for (_, value) in &self.inner.borrow().fields {
            collect_nodes(value, &mut children);
        }
        children
    }

    /// Returns the items of list field `name`, if it is a list.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<Vec<Value>> {
        match self.field(name)? {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns whether field `name` holds a list.
    #[must_use]
    pub fn has_list(&self, name: &str) -> bool {
        self.inner
            .borrow()
            .fields
            .iter()
            .any(|(field, value)| field == name && matches!(value, Value::Array(_)))
    }

    /// Returns the node owning the `body` list targeted by body splices.
    ///
    /// That is this node when its `body` field is a list, or its `body`
    /// child when that child owns a list (a function's block, a class body).
    #[must_use]
    pub fn body_owner(&self) -> Option<Self> {
        if self.has_list("body") {
            return Some(self.clone());
        }
        self.child("body").filter(|body| body.has_list("body"))
    }

    /// Returns whether body splices can target this node.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body_owner().is_some()
    }

    /// Returns whether this node owns a `properties` list.
    #[must_use]
    pub fn has_properties(&self) -> bool {
        self.has_list("properties")
    }

    /// Inserts `items` into list field `name` at `index`.
    ///
    /// The index is clamped to the list length. Returns `false` and leaves the
    /// node untouched when the field is not a list.
    pub fn insert_items(&self, name: &str, index: usize, items: Vec<Value>) -> bool {
        self.edit_list(name, |list| {
            let at = index.min(list.len());
            list.splice(at..at, items);
            true
        })
        .unwrap_or(false)
    }

    /// Replaces the item at `index` of list field `name`.
    ///
    /// Returns `false` when the field is not a list or `index` is out of
    /// bounds.
    pub fn replace_item(&self, name: &str, index: usize, item: Value) -> bool {
        self.edit_list(name, |list| match list.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        })
        .unwrap_or(false)
    }

    /// Removes every item of list field `name` for which `remove` returns
    /// `true`.
    ///
    /// Returns the number of removed items, or `None` when the field is not
    /// a list.
    pub fn remove_items(&self, name: &str, mut remove: impl FnMut(&Value) -> bool) -> Option<usize> {
        self.edit_list(name, |list| {
            let before = list.len();
            list.retain(|item| !remove(item));
            before.saturating_sub(list.len())
        })
    }

    /// Applies `edit` to list field `name` and records the modification.
    fn edit_list<T>(&self, name: &str, edit: impl FnOnce(&mut Vec<Value>) -> T) -> Option<T> {
        let mut data = self.inner.borrow_mut();
        let list = data.fields.iter_mut().find_map(|(field, value)| match value {
            Value::Array(items) if field == name => Some(items),
            _ => None,
        })?;
        let result = edit(list);
        if !data.modified.iter().any(|field| field == name) {
            data.modified.push(name.to_owned());
        }
        Some(result)
    }

    /// Returns whether any field of this node was modified.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        !self.inner.borrow().modified.is_empty()
    }

    /// Returns whether field `name` was modified.
    #[must_use]
    pub fn is_field_modified(&self, name: &str) -> bool {
        self.inner.borrow().modified.iter().any(|field| field == name)
    }

    /// Returns the node's source origin, if it was parsed.
    #[must_use]
    pub fn origin(&self) -> Option<Origin> {
        self.inner.borrow().origin.clone()
    }

    /// Returns the node as an ESTree-style JSON object.
    ///
    /// The `type` member holds the kind and every field becomes a member of
    /// the same name. A node that is its own ancestor is rendered as `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut path = HashSet::new();
        node_to_json(self, &mut path)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(data) => f
                .debug_struct("Node")
                .field("kind", &data.kind)
                .field(
                    "fields",
                    &data.fields.iter().map(|(name, _)| name).collect::<Vec<_>>(),
                )
                .finish(),
            Err(_) => f.write_str("Node { <borrowed> }"),
        }
    }
}

/// Builder for [`Node`].
#[derive(Debug)]
pub struct NodeBuilder {
    kind: NodeKind,
    fields: Vec<(String, Value)>,
    origin: Option<Origin>,
}

impl NodeBuilder {
    /// Appends a field. A later field with the same name replaces the earlier
    /// value in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = name.into();
        let item = value.into();
        if let Some((_, slot)) = self.fields.iter_mut().find(|(field, _)| *field == key) {
            *slot = item;
        } else {
            self.fields.push((key, item));
        }
        self
    }

    /// Attaches source origin metadata.
    #[must_use]
    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Finishes the node.
    #[must_use]
    pub fn build(self) -> Node {
        Node {
            inner: Rc::new(RefCell::new(NodeData {
                kind: self.kind,
                fields: self.fields,
                origin: self.origin,
                modified: Vec::new(),
            })),
        }
    }
}

fn collect_nodes(value: &Value, out: &mut Vec<Node>) {
    match value {
        Value::Node(node) => out.push(node.clone()),
        Value::Array(items) => {
            for item in items {
                collect_nodes(item, out);
            }
        }
        _ => {}
    }
}

fn node_to_json(node: &Node, path: &mut HashSet<NodeId>) -> serde_json::Value {
    if !path.insert(node.id()) {
        return serde_json::Value::Null;
    }
    let mut object = Map::new();
    object.insert(
        "type".to_owned(),
        serde_json::Value::String(node.kind().as_str().to_owned()),
    );
    for (name, value) in node.fields() {
        object.insert(name, value_to_json(&value, path));
    }
    path.remove(&node.id());
    serde_json::Value::Object(object)
}

fn value_to_json(value: &Value, path: &mut HashSet<NodeId>) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(flag) => serde_json::Value::Bool(*flag),
        Value::Number(number) => json_number(*number),
        Value::String(text) => serde_json::Value::String(text.clone()),
        Value::Node(node) => node_to_json(node, path),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(|item| value_to_json(item, path)).collect(),
        ),
    }
}

/// Converts a number to JSON, preferring an integer representation.
///
/// Non-finite numbers have no JSON form and become `null`.
pub(crate) fn json_number(number: f64) -> serde_json::Value {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "integral and within the safe integer range"
        )]
        let integer = number as i64;
        return serde_json::Value::Number(Number::from(integer));
    }
    Number::from_f64(number).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
