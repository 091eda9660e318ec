//! Reads and writes on `properties` lists of object expressions.

use std::fmt;
use std::rc::Rc;

use grafter_core::{literal_value, property_key, GraftError, Node, NodeKind, Value};
use tracing::debug;

use crate::collection::Collection;

const ENGINE_TARGET: &str = "grafter::engine";

/// Selects the properties removed by [`Collection::remove_prop`].
#[derive(Clone)]
pub enum PropertyMatcher {
    /// Properties whose key equals the name.
    Name(String),
    /// Properties for which the function, given the key and the property
    /// node, returns `true`.
    Matching(Rc<dyn Fn(&str, &Node) -> bool>),
}

impl PropertyMatcher {
    /// Creates a matcher from a function of the key and property node.
    #[must_use]
    pub fn matching(matches: impl Fn(&str, &Node) -> bool + 'static) -> Self {
        Self::Matching(Rc::new(matches))
    }

    fn matches(&self, key: &str, property: &Node) -> bool {
        match self {
            Self::Name(name) => name == key,
            Self::Matching(matches) => matches(key, property),
        }
    }
}

impl fmt::Debug for PropertyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Matching(_) => f.write_str("Matching(<fn>)"),
        }
    }
}

impl From<&str> for PropertyMatcher {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for PropertyMatcher {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Returns the key of a property entry, if it has a static one.
fn entry_key(entry: &Value) -> Option<(Node, String)> {
    let property = entry.as_node()?;
    if property.field("computed").as_ref().and_then(Value::as_bool) == Some(true) {
        return None;
    }
    let key = property_key(&property.child("key")?)?;
    Some((property.clone(), key))
}

fn position_of(owner: &Node, key: &str) -> Option<usize> {
    owner
        .list("properties")?
        .iter()
        .position(|entry| entry_key(entry).is_some_and(|(_, found)| found == key))
}

impl Collection {
    /// Returns the value node of the first property named `name`.
    ///
    /// Roots are consulted in order; those without a `properties` list are
    /// skipped.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<Node> {
        self.iter().find_map(|root| {
            root.list("properties")?
                .iter()
                .filter_map(entry_key)
                .find(|(_, key)| key == name)
                .and_then(|(property, _)| property.child("value"))
        })
    }

    /// Returns the host value of the property named `name`, if it is a
    /// literal.
    #[must_use]
    pub fn prop_value(&self, name: &str) -> Option<serde_json::Value> {
        self.prop(name).as_ref().and_then(literal_value)
    }

    /// Writes the property `name` on every root.
    ///
    /// The value is rendered as the object literal `{name: value}` and
    /// parsed; its entries replace same-named properties in place or are
    /// appended.
    ///
    /// Returns `Ok(false)` when the collection is empty or some root has no
    /// `properties` list; such roots are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::Conversion`] when the value cannot be rendered
    /// as an object literal and [`GraftError::Parse`] when the rendering does
    /// not parse.
    pub fn set_prop(&self, name: &str, value: &serde_json::Value) -> Result<bool, GraftError> {
        if self.is_empty() {
            return Ok(false);
        }
        let mut pair = serde_json::Map::new();
        pair.insert(name.to_owned(), value.clone());
        let text = self.engine().value_to_text(&serde_json::Value::Object(pair))?;

        let mut accepted = true;
        for root in self {
            if !root.has_properties() {
                debug!(
                    target: ENGINE_TARGET,
                    kind = %root.kind(),
                    "skipping property write on a node without properties"
                );
                accepted = false;
                continue;
            }
            for entry in self.property_entries(&text)? {
                let replaced = entry_key(&entry)
                    .and_then(|(_, key)| position_of(root, &key))
                    .is_some_and(|position| {
                        root.replace_item("properties", position, entry.clone())
                    });
                if !replaced {
                    root.insert_items("properties", usize::MAX, vec![entry]);
                }
            }
        }
        Ok(accepted)
    }

    /// Writes every member of a JSON object with [`set_prop`](Self::set_prop).
    ///
    /// Non-object values have no members to write.
    ///
    /// # Errors
    ///
    /// As for [`set_prop`](Self::set_prop).
    pub fn set_props(&self, object: &serde_json::Value) -> Result<bool, GraftError> {
        let mut accepted = !self.is_empty() && self.iter().all(Node::has_properties);
        if let Some(members) = object.as_object() {
            for (name, value) in members {
                accepted &= self.set_prop(name, value)?;
            }
        }
        Ok(accepted)
    }

    /// Removes every property selected by `matcher` from every root.
    ///
    /// Returns `false` when the collection is empty or some root has no
    /// `properties` list.
    pub fn remove_prop(&self, matcher: impl Into<PropertyMatcher>) -> bool {
        let selected = matcher.into();
        let mut accepted = !self.is_empty();
        for root in self {
            let removed = root.remove_items("properties", |entry| {
                entry_key(entry).is_some_and(|(property, key)| selected.matches(&key, &property))
            });
            accepted &= removed.is_some();
        }
        accepted
    }

    /// Parses rendered object literal text and returns its entries.
    fn property_entries(&self, text: &str) -> Result<Vec<Value>, GraftError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let tree = self.engine().parse(&format!("({text})"))?;
        tree.list("body")
            .and_then(|body| body.first().and_then(Value::as_node).cloned())
            .and_then(|statement| statement.child("expression"))
            .filter(|expression| expression.is(&NodeKind::ObjectExpression))
            .and_then(|object| object.list("properties"))
            .ok_or_else(|| {
                GraftError::conversion(format!("`{text}` is not an object literal"))
            })
    }
}
