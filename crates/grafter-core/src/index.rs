//! Flat pre-order index of the nodes reachable from a root.
//!
//! The index is the first half of a search: every distinct node reachable
//! from the root through fields or array elements gets exactly one
//! [`IndexEntry`], in discovery order, linked to the entry of the node it was
//! first reached from. Arrays are walked but never indexed themselves.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::kind::NodeKind;
use crate::node::{Node, NodeId};
use crate::value::Value;

/// A per-search snapshot of one node.
///
/// Holds a shallow copy of the node's fields at indexing time, the original
/// node, and a back-reference to the entry of its structural parent.
#[derive(Debug)]
pub struct IndexEntry {
    node: Node,
    kind: NodeKind,
    fields: Vec<(String, Value)>,
    parent: Option<Rc<IndexEntry>>,
    position: usize,
}

impl IndexEntry {
    /// Returns the original node.
    #[must_use]
    pub const fn node(&self) -> &Node {
        &self.node
    }

    /// Returns the node's `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns whether the node's `type` tag has the given name.
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.kind.as_str() == kind
    }

    /// Returns the snapshot of field `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns the string scalar in field `name`, if any.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Returns the snapshot of every field in its natural order.
    #[must_use]
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Returns the entry of the structural parent, absent for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    /// Returns the discovery position of this entry.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of ancestors above this entry.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0_usize;
        let mut current = self.parent();
        while let Some(entry) = current {
            depth = depth.saturating_add(1);
            current = entry.parent();
        }
        depth
    }
}

/// Entries for every distinct node reachable from a root, in pre-order.
#[derive(Debug, Default)]
pub struct Index {
    entries: Vec<Rc<IndexEntry>>,
}

impl Index {
    /// Walks the tree below `root` and indexes every distinct node.
    ///
    /// A node reachable along several paths is indexed on first discovery
    /// only, but its subtree is walked again each time it is reached, with
    /// the existing entry as parent. A node is never re-entered while it is
    /// one of its own ancestors, so cyclic graphs terminate.
    #[must_use]
    pub fn build(root: &Node) -> Self {
        let mut builder = IndexBuilder::default();
        builder.visit_node(root, None);
        Self {
            entries: builder.entries,
        }
    }

    /// Returns the entries in discovery order.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter().map(AsRef::as_ref)
    }

    /// Returns the entry at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&IndexEntry> {
        self.entries.get(position).map(AsRef::as_ref)
    }

    /// Returns the number of indexed nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the index is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Default)]
struct IndexBuilder {
    entries: Vec<Rc<IndexEntry>>,
    by_node: HashMap<NodeId, Rc<IndexEntry>>,
    path: HashSet<NodeId>,
}

impl IndexBuilder {
    fn visit(&mut self, value: &Value, parent: Option<&Rc<IndexEntry>>) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.visit(item, parent);
                }
            }
            Value::Node(node) => self.visit_node(node, parent),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    fn visit_node(&mut self, node: &Node, parent: Option<&Rc<IndexEntry>>) {
        let id = node.id();
        if !self.path.insert(id) {
            return;
        }

        let fields = node.fields();
        let entry = match self.by_node.get(&id) {
            Some(existing) => Rc::clone(existing),
            None => {
                let entry = Rc::new(IndexEntry {
                    node: node.clone(),
                    kind: node.kind(),
                    fields: fields.clone(),
                    parent: parent.map(Rc::clone),
                    position: self.entries.len(),
                });
                self.entries.push(Rc::clone(&entry));
                self.by_node.insert(id, Rc::clone(&entry));
                entry
            }
        };

        for (_, value) in &fields {
            self.visit(value, Some(&entry));
        }
        self.path.remove(&id);
    }
}
