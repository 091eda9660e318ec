//! JSON-style rendering of host values as literal expressions.

use grafter_core::{GraftError, LiteralStringifier, Replacer, StringifyOptions};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

/// Widest indentation honoured, as in `JSON.stringify`.
const MAX_INDENT: usize = 10;

/// Renders values the way `JSON.stringify` does.
///
/// An indent of zero renders compactly. The replacer runs on the root with
/// the key `""`, then on every member, and a root it drops renders as the
/// empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonStringifier;

impl JsonStringifier {
    /// Creates a stringifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LiteralStringifier for JsonStringifier {
    fn stringify(&self, value: &Value, options: &StringifyOptions) -> Result<String, GraftError> {
        let replaced = match options.replacer() {
            Some(replacer) => match replace(replacer, "", value) {
                Some(kept) => kept,
                None => return Ok(String::new()),
            },
            None => value.clone(),
        };
        render(&replaced, options.indent().min(MAX_INDENT))
    }
}

fn replace(replacer: &Replacer, key: &str, value: &Value) -> Option<Value> {
    let kept = replacer(key, value)?;
    Some(match kept {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(position, item)| {
                    replace(replacer, &position.to_string(), &item).unwrap_or(Value::Null)
                })
                .collect(),
        ),
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter_map(|(name, member)| {
                    replace(replacer, &name, &member).map(|kept_member| (name, kept_member))
                })
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    })
}

fn render(value: &Value, indent: usize) -> Result<String, GraftError> {
    if indent == 0 {
        return serde_json::to_string(value).map_err(|err| GraftError::conversion(err.to_string()));
    }
    let unit = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(unit.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|err| GraftError::conversion(err.to_string()))?;
    String::from_utf8(out).map_err(|err| GraftError::conversion(err.to_string()))
}
