//! Input accepted by loads and body splices.

/// Source text or a host value to be converted to source text.
///
/// Strings convert to [`Source::Text`]; use [`Source::Value`] (or convert a
/// [`serde_json::Value`]) to have a string treated as a string literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Source text, parsed as written.
    Text(String),
    /// A host value, stringified into a literal expression first.
    Value(serde_json::Value),
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<serde_json::Value> for Source {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value)
    }
}
