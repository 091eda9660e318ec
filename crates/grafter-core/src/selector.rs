//! Textual predicates.
//!
//! A selector names a node kind (or `*` for any kind) followed by optional
//! attribute tests:
//!
//! - `[path]` - the field at `path` is present and not `null`
//! - `[path=value]` - the field at `path` equals `value`
//!
//! Paths are dotted field names that step through child nodes, so
//! `FunctionDeclaration[id.name=main]` selects the function named `main`.
//! Values are quoted strings, numbers, `true`, `false`, `null`, or bare
//! words compared as strings.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::GraftError;
use crate::index::IndexEntry;
use crate::value::Value;

/// A literal on the right-hand side of an attribute test.
#[derive(Debug, Clone, PartialEq)]
enum Expected {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Expected {
    fn matches(&self, actual: Option<&Value>) -> bool {
        match (self, actual) {
            (Self::Null, None | Some(Value::Null)) => true,
            (Self::Bool(expected), Some(Value::Bool(actual))) => expected == actual,
            (Self::Number(expected), Some(Value::Number(actual))) => {
                expected.total_cmp(actual).is_eq()
            }
            (Self::Text(expected), Some(Value::String(actual))) => expected == actual,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Attribute {
    path: Vec<String>,
    expected: Option<Expected>,
}

impl Attribute {
    fn matches(&self, entry: &IndexEntry) -> bool {
        let resolved = resolve(entry, &self.path);
        match &self.expected {
            Some(expected) => expected.matches(resolved.as_ref()),
            None => resolved.is_some_and(|value| !value.is_null()),
        }
    }
}

/// A parsed selector.
///
/// # Examples
///
/// ```
/// use grafter_core::Selector;
///
/// let selector = Selector::parse("Property[key.name=\"and\"]")?;
/// assert_eq!(selector.kind(), Some("Property"));
/// assert!(Selector::parse("Property[").is_err());
/// # Ok::<(), grafter_core::GraftError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    source: String,
    kind: Option<String>,
    attributes: Vec<Attribute>,
}

impl Selector {
    /// Parses a selector.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::InvalidPredicate`] when the text is empty or
    /// malformed.
    pub fn parse(text: &str) -> Result<Self, GraftError> {
        SelectorParser::new(text).parse()
    }

    /// Returns the kind this selector requires, `None` for `*`.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns whether `entry` satisfies this selector.
    #[must_use]
    pub fn matches(&self, entry: &IndexEntry) -> bool {
        if let Some(kind) = &self.kind {
            if !entry.is(kind) {
                return false;
            }
        }
        self.attributes
            .iter()
            .all(|attribute| attribute.matches(entry))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Follows a dotted path from an entry's fields through child nodes.
fn resolve(entry: &IndexEntry, path: &[String]) -> Option<Value> {
    let (first, rest) = path.split_first()?;
    let mut current = entry.field(first)?.clone();
    for segment in rest {
        current = current.as_node()?.field(segment)?;
    }
    Some(current)
}

struct SelectorParser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> SelectorParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn error(&self, message: impl fmt::Display) -> GraftError {
        GraftError::invalid_predicate(format!("{message} in selector `{}`", self.text))
    }

    fn parse(mut self) -> Result<Selector, GraftError> {
        self.skip_whitespace();
        let kind = if self.eat('*') {
            None
        } else {
            let name = self.identifier();
            if name.is_empty() {
                return Err(self.error("expected a node kind or `*`"));
            }
            Some(name)
        };

        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek().copied() {
                None => break,
                Some((_, '[')) => {
                    self.chars.next();
                    attributes.push(self.attribute()?);
                }
                Some((offset, ch)) => {
                    return Err(self.error(format!("unexpected `{ch}` at offset {offset}")));
                }
            }
        }

        Ok(Selector {
            source: self.text.trim().to_owned(),
            kind,
            attributes,
        })
    }

    fn attribute(&mut self) -> Result<Attribute, GraftError> {
        self.skip_whitespace();
        let mut path = Vec::new();
        loop {
            let segment = self.identifier();
            if segment.is_empty() {
                return Err(self.error("expected a field name"));
            }
            path.push(segment);
            if !self.eat('.') {
                break;
            }
        }

        self.skip_whitespace();
        let expected = if self.eat('=') {
            self.skip_whitespace();
            Some(self.literal()?)
        } else {
            None
        };

        self.skip_whitespace();
        if !self.eat(']') {
            return Err(self.error("expected `]`"));
        }
        Ok(Attribute { path, expected })
    }

    fn literal(&mut self) -> Result<Expected, GraftError> {
        match self.chars.peek().copied() {
            Some((_, quote @ ('"' | '\''))) => {
                self.chars.next();
                self.quoted(quote).map(Expected::Text)
            }
            Some(_) => {
                let word = self.word();
                if word.is_empty() {
                    return Err(self.error("expected a value"));
                }
                Ok(match word.as_str() {
                    "null" => Expected::Null,
                    "true" => Expected::Bool(true),
                    "false" => Expected::Bool(false),
                    _ => word
                        .parse::<f64>()
                        .map_or(Expected::Text(word), Expected::Number),
                })
            }
            None => Err(self.error("expected a value")),
        }
    }

    fn quoted(&mut self, quote: char) -> Result<String, GraftError> {
        let mut text = String::new();
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '\\' => match self.chars.next() {
                    Some((_, escaped)) => text.push(escaped),
                    None => break,
                },
                c if c == quote => return Ok(text),
                c => text.push(c),
            }
        }
        Err(self.error("unterminated string"))
    }

    fn identifier(&mut self) -> String {
        self.take_while(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }

    fn word(&mut self) -> String {
        self.take_while(|c| !c.is_whitespace() && c != ']')
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some((_, c)) = self.chars.peek().copied() {
            if !accept(c) {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        text
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek().is_some_and(|(_, c)| *c == expected) {
            self.chars.next();
            return true;
        }
        false
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            self.chars.next();
        }
    }
}
