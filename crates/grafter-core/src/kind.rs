//! Node type discriminators.
//!
//! This module provides the [`NodeKind`] enum, the `type` tag carried by every
//! tree node. Well-known ESTree kinds get their own variant; anything else is
//! kept verbatim in [`NodeKind::Other`].

use std::fmt;
use std::str::FromStr;

macro_rules! node_kinds {
    ($($(#[$doc:meta])* $variant:ident),+ $(,)?) => {
        /// The `type` discriminator of a tree node.
        ///
        /// Variants mirror the ESTree node types. Unknown or extension kinds
        /// are preserved in [`NodeKind::Other`], so parsing and displaying a
        /// kind always round-trips.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum NodeKind {
            $($(#[$doc])* $variant,)+
            /// A kind with no dedicated variant.
            Other(String),
        }

        impl NodeKind {
            /// Returns the ESTree name of this kind.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                    Self::Other(name) => name,
                }
            }

            fn known(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

node_kinds! {
    /// The root of a parsed source file.
    Program,
    /// An expression used as a statement.
    ExpressionStatement,
    /// A braced list of statements.
    BlockStatement,
    /// A lone `;`.
    EmptyStatement,
    /// `return` with an optional argument.
    ReturnStatement,
    /// `if` with optional `else`.
    IfStatement,
    /// C-style `for` loop.
    ForStatement,
    /// `for ... in` loop.
    ForInStatement,
    /// `for ... of` loop.
    ForOfStatement,
    /// `while` loop.
    WhileStatement,
    /// `do ... while` loop.
    DoWhileStatement,
    /// `break`.
    BreakStatement,
    /// `continue`.
    ContinueStatement,
    /// `throw`.
    ThrowStatement,
    /// `try` with handler and finaliser.
    TryStatement,
    /// `catch` clause.
    CatchClause,
    /// `switch`.
    SwitchStatement,
    /// `case` or `default` clause.
    SwitchCase,
    /// A labelled statement.
    LabeledStatement,
    /// A named function declaration.
    FunctionDeclaration,
    /// A function expression.
    FunctionExpression,
    /// An arrow function.
    ArrowFunctionExpression,
    /// A class declaration.
    ClassDeclaration,
    /// A class expression.
    ClassExpression,
    /// The member list of a class.
    ClassBody,
    /// A method inside a class body.
    MethodDefinition,
    /// A field inside a class body.
    PropertyDefinition,
    /// `var`, `let`, or `const` declaration.
    VariableDeclaration,
    /// A single binding inside a variable declaration.
    VariableDeclarator,
    /// A name.
    Identifier,
    /// A string, number, boolean, or null literal.
    Literal,
    /// A template string.
    TemplateLiteral,
    /// `this`.
    ThisExpression,
    /// An array literal.
    ArrayExpression,
    /// An object literal.
    ObjectExpression,
    /// A key/value entry of an object literal.
    Property,
    /// `...argument`.
    SpreadElement,
    /// A call.
    CallExpression,
    /// A `new` call.
    NewExpression,
    /// Property access.
    MemberExpression,
    /// Assignment, including compound operators.
    AssignmentExpression,
    /// Arithmetic, comparison, and bitwise operators.
    BinaryExpression,
    /// `&&`, `||`, and `??`.
    LogicalExpression,
    /// Prefix operators such as `!`, `-`, and `typeof`.
    UnaryExpression,
    /// `++` and `--`.
    UpdateExpression,
    /// `test ? consequent : alternate`.
    ConditionalExpression,
    /// Comma-separated expressions.
    SequenceExpression,
    /// `await`.
    AwaitExpression,
    /// `yield`.
    YieldExpression,
    /// `import` declaration.
    ImportDeclaration,
    /// Named `export` declaration.
    ExportNamedDeclaration,
    /// `export default` declaration.
    ExportDefaultDeclaration,
}

impl NodeKind {
    /// Returns whether this kind is an [`Other`](Self::Other) escape hatch.
    #[must_use]
    pub const fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }

    /// Returns the declaration counterpart of an expression kind.
    ///
    /// `FunctionExpression` becomes `FunctionDeclaration`, `ClassExpression`
    /// becomes `ClassDeclaration`. Returns `None` when the name does not end
    /// in `Expression` or the counterpart is not a known kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use grafter_core::NodeKind;
    ///
    /// assert_eq!(
    ///     NodeKind::FunctionExpression.declaration_counterpart(),
    ///     Some(NodeKind::FunctionDeclaration)
    /// );
    /// assert_eq!(NodeKind::ObjectExpression.declaration_counterpart(), None);
    /// ```
    #[must_use]
    pub fn declaration_counterpart(&self) -> Option<Self> {
        let stem = self.as_str().strip_suffix("Expression")?;
        Self::known(&format!("{stem}Declaration"))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(input))
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        Self::known(name).unwrap_or_else(|| Self::Other(name.to_owned()))
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        Self::known(&name).unwrap_or(Self::Other(name))
    }
}

impl PartialEq<str> for NodeKind {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NodeKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
