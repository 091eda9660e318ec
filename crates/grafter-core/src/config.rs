//! Options for searching, literal conversion, and printing.
//!
//! Every option struct deserialises from camelCase JSON with all members
//! optional, so a configuration document only needs the values it changes.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::GraftError;

/// Options for a search.
///
/// # Defaults
///
/// - `throw_errors`: `false` (predicate failures count as non-matching)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    throw_errors: bool,
}

impl SearchOptions {
    /// Creates search options.
    #[must_use]
    pub const fn new(throw_errors: bool) -> Self {
        Self { throw_errors }
    }

    /// Returns whether predicate failures abort the search.
    #[must_use]
    pub const fn throw_errors(&self) -> bool {
        self.throw_errors
    }

    /// Returns a copy with `throw_errors` set.
    #[must_use]
    pub const fn with_throw_errors(mut self, throw_errors: bool) -> Self {
        self.throw_errors = throw_errors;
        self
    }
}

/// A `JSON.stringify` style replacer.
///
/// Called with the member key (`""` for the root, the decimal index for
/// array items) and the current value. Returning `None` omits an object
/// member or turns an array item into `null`.
pub type Replacer = Rc<dyn Fn(&str, &serde_json::Value) -> Option<serde_json::Value>>;

/// Options for converting host values to literal source text.
///
/// # Defaults
///
/// - `indent`: 2
/// - `replacer`: none
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringifyOptions {
    indent: usize,
    #[serde(skip)]
    replacer: Option<Replacer>,
}

impl StringifyOptions {
    /// Creates options with the given indentation width and no replacer.
    #[must_use]
    pub const fn new(indent: usize) -> Self {
        Self {
            indent,
            replacer: None,
        }
    }

    /// Returns the indentation width.
    #[must_use]
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// Returns the replacer, if any.
    #[must_use]
    pub const fn replacer(&self) -> Option<&Replacer> {
        self.replacer.as_ref()
    }

    /// Returns a copy with the given replacer.
    #[must_use]
    pub fn with_replacer(
        mut self,
        replacer: impl Fn(&str, &serde_json::Value) -> Option<serde_json::Value> + 'static,
    ) -> Self {
        self.replacer = Some(Rc::new(replacer));
        self
    }
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self::new(2)
    }
}

impl fmt::Debug for StringifyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringifyOptions")
            .field("indent", &self.indent)
            .field("replacer", &self.replacer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Formatting options passed through to the printer.
///
/// # Defaults
///
/// - `tab_width`: 4
/// - `use_tabs`: `false`
/// - `line_terminator`: `"\n"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintOptions {
    tab_width: usize,
    use_tabs: bool,
    line_terminator: String,
}

impl PrintOptions {
    /// Creates print options.
    #[must_use]
    pub fn new(tab_width: usize, use_tabs: bool, line_terminator: impl Into<String>) -> Self {
        Self {
            tab_width,
            use_tabs,
            line_terminator: line_terminator.into(),
        }
    }

    /// Returns the width of one indentation level in spaces.
    #[must_use]
    pub const fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Returns whether indentation uses tabs.
    #[must_use]
    pub const fn use_tabs(&self) -> bool {
        self.use_tabs
    }

    /// Returns the line terminator.
    #[must_use]
    pub fn line_terminator(&self) -> &str {
        &self.line_terminator
    }

    /// Returns the text of one indentation level.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_owned()
        } else {
            " ".repeat(self.tab_width)
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new(4, false, "\n")
    }
}

/// Engine-wide configuration.
///
/// # Example
///
/// ```
/// use grafter_core::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "search": { "throwErrors": true } }"#)?;
/// assert!(config.search().throw_errors());
/// assert_eq!(config.stringify().indent(), 2);
/// # Ok::<(), grafter_core::GraftError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    search: SearchOptions,
    stringify: StringifyOptions,
    print: PrintOptions,
}

impl EngineConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub const fn new(
        search: SearchOptions,
        stringify: StringifyOptions,
        print: PrintOptions,
    ) -> Self {
        Self {
            search,
            stringify,
            print,
        }
    }

    /// Loads a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`GraftError::InvalidConfig`] when the document is not valid
    /// JSON or has members of the wrong type.
    pub fn from_json(document: &str) -> Result<Self, GraftError> {
        serde_json::from_str(document).map_err(|err| GraftError::invalid_config(err.to_string()))
    }

    /// Returns the default search options.
    #[must_use]
    pub const fn search(&self) -> &SearchOptions {
        &self.search
    }

    /// Returns the literal conversion options.
    #[must_use]
    pub const fn stringify(&self) -> &StringifyOptions {
        &self.stringify
    }

    /// Returns the print options.
    #[must_use]
    pub const fn print(&self) -> &PrintOptions {
        &self.print
    }

    /// Returns a copy with the given search options.
    #[must_use]
    pub fn with_search(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    /// Returns a copy with the given literal conversion options.
    #[must_use]
    pub fn with_stringify(mut self, stringify: StringifyOptions) -> Self {
        self.stringify = stringify;
        self
    }

    /// Returns a copy with the given print options.
    #[must_use]
    pub fn with_print(mut self, print: PrintOptions) -> Self {
        self.print = print;
        self
    }
}
