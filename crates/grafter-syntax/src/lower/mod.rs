//! Lowering of Tree-sitter syntax trees to ESTree-shaped nodes.
//!
//! Well-known grammar kinds are mapped to their ESTree counterparts with
//! ESTree field names. Anything else is lowered generically: the kind is
//! PascalCased, named grammar fields become camelCase fields, unnamed named
//! children are collected under `children`, and leaves keep their text under
//! `raw`. Parentheses are transparent and comments are dropped.
//!
//! Every lowered node records its [`Origin`]; statement bodies, class bodies,
//! and object literals additionally record a [`ListLayout`] so the printer
//! can re-render them after an edit.

mod literal;

use std::ops::Range;
use std::rc::Rc;

use grafter_core::{
    ListLayout, ListSeparator, Node, NodeBuilder, NodeKind, Origin, ParseError, Value,
};
use tree_sitter::Node as TsNode;

use crate::position::point_to_one_based;
use literal::{decode_string, parse_number, Number};

/// Expression kinds that an expression statement may not start with.
const STATEMENT_LOOKAHEAD: &[&str] = &[
    "function",
    "function_expression",
    "generator_function",
    "class",
];

/// Converts one parsed source text into nodes.
pub(crate) struct Lowerer<'src> {
    text: &'src str,
    source: Rc<str>,
}

impl<'src> Lowerer<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self {
            text,
            source: Rc::from(text),
        }
    }

    /// Lowers the root `program` node.
    pub(crate) fn program(&self, root: TsNode<'_>) -> Result<Node, ParseError> {
        let statements = statements(root);
        let whole = 0..self.text.len();
        let layout = ListLayout::new(
            "body",
            whole.clone(),
            ranges(&statements),
            ListSeparator::Newline,
            false,
        );
        let origin = Origin::new(Rc::clone(&self.source), whole).with_list(layout);
        Ok(Node::builder(NodeKind::Program)
            .origin(origin)
            .field("body", self.lower_all(&statements)?)
            .field("sourceType", "module")
            .build())
    }

    fn lower(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        match node.kind() {
            "expression_statement" => self.expression_statement(node),
            "statement_block" => self.statement_list(node, NodeKind::BlockStatement),
            "class_body" => self.statement_list(node, NodeKind::ClassBody),
            "empty_statement" => Ok(self.builder(NodeKind::EmptyStatement, node).build()),
            "return_statement" => self.with_argument(node, NodeKind::ReturnStatement),
            "throw_statement" => self.with_argument(node, NodeKind::ThrowStatement),
            "await_expression" => self.with_argument(node, NodeKind::AwaitExpression),
            "spread_element" => self.with_argument(node, NodeKind::SpreadElement),
            "rest_pattern" => self.with_argument(node, NodeKind::from("RestElement")),
            "parenthesized_expression" | "else_clause" => self.transparent(node),
            "if_statement" => self.if_statement(node),
            "for_in_statement" => self.for_in_statement(node),
            "try_statement" => self.try_statement(node),
            "catch_clause" => Ok(self
                .builder(NodeKind::CatchClause, node)
                .field("param", self.child(node, "parameter")?)
                .field("body", self.child(node, "body")?)
                .build()),
            "function_declaration" | "generator_function_declaration" => {
                self.function(node, NodeKind::FunctionDeclaration)
            }
            "function" | "function_expression" | "generator_function" if is_exported(node) => {
                self.function(node, NodeKind::FunctionDeclaration)
            }
            "function" | "function_expression" | "generator_function" => {
                self.function(node, NodeKind::FunctionExpression)
            }
            "arrow_function" => self.arrow_function(node),
            "class_declaration" => self.class(node, NodeKind::ClassDeclaration),
            "class" if is_exported(node) => self.class(node, NodeKind::ClassDeclaration),
            "class" => self.class(node, NodeKind::ClassExpression),
            "method_definition" => self.method_definition(node),
            "field_definition" | "public_field_definition" => self.field_definition(node),
            "lexical_declaration" | "variable_declaration" => self.variable_declaration(node),
            "variable_declarator" => Ok(self
                .builder(NodeKind::VariableDeclarator, node)
                .field("id", self.child(node, "name")?)
                .field("init", self.child(node, "value")?)
                .build()),
            "object" => self.object(node),
            "pair" => self.pair(node),
            "shorthand_property_identifier" => Ok(self.shorthand_property(node)),
            "array" => Ok(self
                .builder(NodeKind::ArrayExpression, node)
                .field("elements", self.lower_all(&named_children(node))?)
                .build()),
            "identifier"
            | "property_identifier"
            | "private_property_identifier"
            | "shorthand_property_identifier_pattern"
            | "statement_identifier"
            | "type_identifier"
            | "undefined" => Ok(self.identifier(node)),
            "string" => Ok(self.string(node)),
            "number" => Ok(self.number(node)),
            "true" | "false" => Ok(self
                .literal(node)
                .field("value", node.kind() == "true")
                .build()),
            "null" => Ok(self.literal(node).field("value", Value::Null).build()),
            "this" => Ok(self.builder(NodeKind::ThisExpression, node).build()),
            "call_expression" => self.call(node, NodeKind::CallExpression, "function"),
            "new_expression" => self.call(node, NodeKind::NewExpression, "constructor"),
            "member_expression" => self.member(node, "property", false),
            "subscript_expression" => self.member(node, "index", true),
            "assignment_expression" | "augmented_assignment_expression" => {
                self.assignment(node)
            }
            "binary_expression" => self.binary(node),
            "unary_expression" => Ok(self
                .builder(NodeKind::UnaryExpression, node)
                .field("operator", self.field_text(node, "operator"))
                .field("prefix", true)
                .field("argument", self.child(node, "argument")?)
                .build()),
            "update_expression" => self.update(node),
            "ternary_expression" => Ok(self
                .builder(NodeKind::ConditionalExpression, node)
                .field("test", self.child(node, "condition")?)
                .field("consequent", self.child(node, "consequence")?)
                .field("alternate", self.child(node, "alternative")?)
                .build()),
            "required_parameter" | "optional_parameter" => self.parameter(node),
            _ => self.generic(node),
        }
    }

    fn lower_all(&self, nodes: &[TsNode<'_>]) -> Result<Vec<Value>, ParseError> {
        nodes
            .iter()
            .map(|node| self.lower(*node).map(Value::from))
            .collect()
    }

    /// Lowers the child in grammar field `field`, `null` when absent.
    fn child(&self, node: TsNode<'_>, field: &str) -> Result<Value, ParseError> {
        node.child_by_field_name(field)
            .map(|child| self.lower(child))
            .transpose()
            .map(Value::from)
    }

    fn text(&self, node: TsNode<'_>) -> &'src str {
        self.text.get(node.byte_range()).unwrap_or_default()
    }

    fn field_text(&self, node: TsNode<'_>, field: &str) -> &'src str {
        node.child_by_field_name(field)
            .map(|child| self.text(child))
            .unwrap_or_default()
    }

    fn origin(&self, range: Range<usize>) -> Origin {
        Origin::new(Rc::clone(&self.source), range)
    }

    fn builder(&self, kind: NodeKind, node: TsNode<'_>) -> NodeBuilder {
        Node::builder(kind).origin(self.origin(node.byte_range()))
    }

    fn expression_statement(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let expression = named_children(node).into_iter().next();
        if let Some(head) = expression.filter(|child| STATEMENT_LOOKAHEAD.contains(&child.kind())) {
            let keyword = first_child(head).map_or_else(|| head.kind(), |token| token.kind());
            let (line, column) = point_to_one_based(head.start_position());
            return Err(ParseError::unexpected_token(
                format!("unexpected token `{keyword}` at the start of a statement"),
                line,
                column,
            ));
        }
        let lowered = expression.map(|child| self.lower(child)).transpose()?;
        Ok(self
            .builder(NodeKind::ExpressionStatement, node)
            .field("expression", lowered)
            .build())
    }

    /// Lowers a braced list of statements or class members.
    fn statement_list(&self, node: TsNode<'_>, kind: NodeKind) -> Result<Node, ParseError> {
        let items = statements(node);
        let layout = delimited_layout("body", node, &items, ListSeparator::Newline);
        Ok(Node::builder(kind)
            .origin(self.origin(node.byte_range()).with_list(layout))
            .field("body", self.lower_all(&items)?)
            .build())
    }

    fn with_argument(&self, node: TsNode<'_>, kind: NodeKind) -> Result<Node, ParseError> {
        let argument = named_children(node)
            .into_iter()
            .next()
            .map(|child| self.lower(child))
            .transpose()?;
        Ok(self.builder(kind, node).field("argument", argument).build())
    }

    /// Lowers the single wrapped child in place of its wrapper.
    fn transparent(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        match named_children(node).into_iter().next() {
            Some(inner) => self.lower(inner),
            None => self.generic(node),
        }
    }

    fn if_statement(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        Ok(self
            .builder(NodeKind::IfStatement, node)
            .field("test", self.child(node, "condition")?)
            .field("consequent", self.child(node, "consequence")?)
            .field("alternate", self.child(node, "alternative")?)
            .build())
    }

    /// Lowers `for (left in right)` and `for (left of right)`.
    fn for_in_statement(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let of = self.field_text(node, "operator") == "of";
        let kind = if of {
            NodeKind::ForOfStatement
        } else {
            NodeKind::ForInStatement
        };
        let loop_node = self
            .builder(kind, node)
            .field("left", self.loop_target(node)?)
            .field("right", self.child(node, "right")?)
            .field("body", self.child(node, "body")?);
        if of {
            return Ok(loop_node.field("await", has_token(node, "await")).build());
        }
        Ok(loop_node.build())
    }

    /// Lowers the left side of a for-in or for-of head.
    ///
    /// A declared loop variable becomes a one-declarator declaration
    /// spanning the keyword and the pattern.
    fn loop_target(&self, node: TsNode<'_>) -> Result<Value, ParseError> {
        let target = self.child(node, "left")?;
        let Some(keyword) = node.child_by_field_name("kind") else {
            return Ok(target);
        };
        let end = node
            .child_by_field_name("value")
            .or_else(|| node.child_by_field_name("left"))
            .map_or(keyword.end_byte(), |last| last.end_byte());
        let range = keyword.start_byte()..end;
        let declarator = Node::builder(NodeKind::VariableDeclarator)
            .origin(self.origin(range.clone()))
            .field("id", target)
            .field("init", self.child(node, "value")?)
            .build();
        Ok(Value::from(
            Node::builder(NodeKind::VariableDeclaration)
                .origin(self.origin(range))
                .field("declarations", vec![Value::from(declarator)])
                .field("kind", self.text(keyword))
                .build(),
        ))
    }

    fn try_statement(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let finalizer = node
            .child_by_field_name("finalizer")
            .and_then(|clause| clause.child_by_field_name("body"))
            .map(|block| self.lower(block))
            .transpose()?;
        Ok(self
            .builder(NodeKind::TryStatement, node)
            .field("block", self.child(node, "body")?)
            .field("handler", self.child(node, "handler")?)
            .field("finalizer", finalizer)
            .build())
    }

    fn parameters(&self, node: TsNode<'_>) -> Result<Vec<Value>, ParseError> {
        if let Some(single) = node.child_by_field_name("parameter") {
            return Ok(vec![Value::from(self.lower(single)?)]);
        }
        match node.child_by_field_name("parameters") {
            Some(list) => self.lower_all(&named_children(list)),
            None => Ok(Vec::new()),
        }
    }

    fn parameter(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let pattern = self.child(node, "pattern")?;
        match node.child_by_field_name("value") {
            Some(default) => Ok(self
                .builder(NodeKind::from("AssignmentPattern"), node)
                .field("left", pattern)
                .field("right", self.lower(default)?)
                .build()),
            None => match pattern {
                Value::Node(inner) => Ok(inner),
                _ => self.generic(node),
            },
        }
    }

    fn function(&self, node: TsNode<'_>, kind: NodeKind) -> Result<Node, ParseError> {
        Ok(self
            .builder(kind, node)
            .field("id", self.child(node, "name")?)
            .field("params", self.parameters(node)?)
            .field("body", self.child(node, "body")?)
            .field("async", has_token(node, "async"))
            .field(
                "generator",
                node.kind().contains("generator") || has_token(node, "*"),
            )
            .build())
    }

    fn arrow_function(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let expression_body = node
            .child_by_field_name("body")
            .is_some_and(|body| body.kind() != "statement_block");
        Ok(self
            .builder(NodeKind::ArrowFunctionExpression, node)
            .field("id", Value::Null)
            .field("params", self.parameters(node)?)
            .field("body", self.child(node, "body")?)
            .field("async", has_token(node, "async"))
            .field("expression", expression_body)
            .build())
    }

    fn class(&self, node: TsNode<'_>, kind: NodeKind) -> Result<Node, ParseError> {
        let super_class = child_of_kind(node, "class_heritage")
            .and_then(|heritage| {
                child_of_kind(heritage, "extends_clause")
                    .and_then(|clause| clause.child_by_field_name("value"))
                    .or_else(|| named_children(heritage).into_iter().next())
            })
            .map(|expression| self.lower(expression))
            .transpose()?;
        Ok(self
            .builder(kind, node)
            .field("id", self.child(node, "name")?)
            .field("superClass", super_class)
            .field("body", self.child(node, "body")?)
            .build())
    }

    /// Returns the modifier tokens written before a member's name.
    fn modifiers(node: TsNode<'_>) -> Vec<&'static str> {
        let name_start = node
            .child_by_field_name("name")
            .map_or(node.end_byte(), |name| name.start_byte());
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .filter(|child| !child.is_named() && child.end_byte() <= name_start)
            .map(|child| child.kind())
            .collect()
    }

    /// Lowers a member name, unwrapping computed names.
    fn key(&self, node: TsNode<'_>, field: &str) -> Result<(Value, bool), ParseError> {
        match node.child_by_field_name(field) {
            Some(name) if name.kind() == "computed_property_name" => {
                Ok((Value::from(self.transparent(name)?), true))
            }
            Some(name) => Ok((Value::from(self.lower(name)?), false)),
            None => Ok((Value::Null, false)),
        }
    }

    fn method_value(&self, node: TsNode<'_>, modifiers: &[&str]) -> Result<Node, ParseError> {
        Ok(self
            .builder(NodeKind::FunctionExpression, node)
            .field("id", Value::Null)
            .field("params", self.parameters(node)?)
            .field("body", self.child(node, "body")?)
            .field("async", modifiers.contains(&"async"))
            .field("generator", modifiers.contains(&"*"))
            .build())
    }

    fn method_definition(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let modifiers = Self::modifiers(node);
        let (key, computed) = self.key(node, "name")?;
        let kind = if modifiers.contains(&"get") {
            "get"
        } else if modifiers.contains(&"set") {
            "set"
        } else if self.field_text(node, "name") == "constructor" {
            "constructor"
        } else {
            "method"
        };
        Ok(self
            .builder(NodeKind::MethodDefinition, node)
            .field("key", key)
            .field("value", self.method_value(node, &modifiers)?)
            .field("kind", kind)
            .field("static", modifiers.contains(&"static"))
            .field("computed", computed)
            .build())
    }

    fn field_definition(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let name_field = if node.child_by_field_name("name").is_some() {
            "name"
        } else {
            "property"
        };
        let (key, computed) = self.key(node, name_field)?;
        Ok(self
            .builder(NodeKind::PropertyDefinition, node)
            .field("key", key)
            .field("value", self.child(node, "value")?)
            .field("static", has_token(node, "static"))
            .field("computed", computed)
            .build())
    }

    fn variable_declaration(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let kind = first_child(node).map_or("var", |keyword| self.text(keyword));
        let declarators: Vec<_> = named_children(node)
            .into_iter()
            .filter(|child| child.kind() == "variable_declarator")
            .collect();
        Ok(self
            .builder(NodeKind::VariableDeclaration, node)
            .field("declarations", self.lower_all(&declarators)?)
            .field("kind", kind)
            .build())
    }

    fn object(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let members = named_children(node);
        let layout = delimited_layout("properties", node, &members, ListSeparator::Comma);
        let mut properties = Vec::with_capacity(members.len());
        for member in &members {
            let lowered = if member.kind() == "method_definition" {
                self.object_method(*member)?
            } else {
                self.lower(*member)?
            };
            properties.push(Value::from(lowered));
        }
        Ok(Node::builder(NodeKind::ObjectExpression)
            .origin(self.origin(node.byte_range()).with_list(layout))
            .field("properties", properties)
            .build())
    }

    fn property(
        &self,
        node: TsNode<'_>,
        key: Value,
        value: Value,
        kind: &str,
        flags: PropertyFlags,
    ) -> Node {
        self.builder(NodeKind::Property, node)
            .field("key", key)
            .field("value", value)
            .field("kind", kind)
            .field("method", flags.method)
            .field("shorthand", flags.shorthand)
            .field("computed", flags.computed)
            .build()
    }

    fn pair(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let (key, computed) = self.key(node, "key")?;
        let value = self.child(node, "value")?;
        Ok(self.property(
            node,
            key,
            value,
            "init",
            PropertyFlags {
                computed,
                ..PropertyFlags::default()
            },
        ))
    }

    fn shorthand_property(&self, node: TsNode<'_>) -> Node {
        let key = self.identifier(node);
        let value = self.identifier(node);
        self.property(
            node,
            Value::from(key),
            Value::from(value),
            "init",
            PropertyFlags {
                shorthand: true,
                ..PropertyFlags::default()
            },
        )
    }

    fn object_method(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let modifiers = Self::modifiers(node);
        let (key, computed) = self.key(node, "name")?;
        let (kind, method) = if modifiers.contains(&"get") {
            ("get", false)
        } else if modifiers.contains(&"set") {
            ("set", false)
        } else {
            ("init", true)
        };
        let value = self.method_value(node, &modifiers)?;
        Ok(self.property(
            node,
            key,
            Value::from(value),
            kind,
            PropertyFlags {
                method,
                computed,
                ..PropertyFlags::default()
            },
        ))
    }

    fn identifier(&self, node: TsNode<'_>) -> Node {
        self.builder(NodeKind::Identifier, node)
            .field("name", self.text(node))
            .build()
    }

    fn literal(&self, node: TsNode<'_>) -> NodeBuilder {
        self.builder(NodeKind::Literal, node)
            .field("raw", self.text(node))
    }

    fn string(&self, node: TsNode<'_>) -> Node {
        let raw = self.text(node);
        self.literal(node).field("value", decode_string(raw)).build()
    }

    fn number(&self, node: TsNode<'_>) -> Node {
        match parse_number(self.text(node)) {
            Some(Number::Float(value)) => self.literal(node).field("value", value).build(),
            Some(Number::BigInt(digits)) => self
                .literal(node)
                .field("value", Value::Null)
                .field("bigint", digits)
                .build(),
            None => self.literal(node).field("value", Value::Null).build(),
        }
    }

    fn call(&self, node: TsNode<'_>, kind: NodeKind, callee: &str) -> Result<Node, ParseError> {
        let arguments = match node.child_by_field_name("arguments") {
            Some(list) => self.lower_all(&named_children(list))?,
            None => Vec::new(),
        };
        Ok(self
            .builder(kind, node)
            .field("callee", self.child(node, callee)?)
            .field("arguments", arguments)
            .field("optional", child_of_kind(node, "optional_chain").is_some())
            .build())
    }

    fn member(&self, node: TsNode<'_>, property: &str, computed: bool) -> Result<Node, ParseError> {
        Ok(self
            .builder(NodeKind::MemberExpression, node)
            .field("object", self.child(node, "object")?)
            .field("property", self.child(node, property)?)
            .field("computed", computed)
            .field("optional", child_of_kind(node, "optional_chain").is_some())
            .build())
    }

    fn assignment(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let operator = match self.field_text(node, "operator") {
            "" => "=",
            written => written,
        };
        Ok(self
            .builder(NodeKind::AssignmentExpression, node)
            .field("operator", operator)
            .field("left", self.child(node, "left")?)
            .field("right", self.child(node, "right")?)
            .build())
    }

    fn binary(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let operator = self.field_text(node, "operator");
        let kind = if matches!(operator, "&&" | "||" | "??") {
            NodeKind::LogicalExpression
        } else {
            NodeKind::BinaryExpression
        };
        Ok(self
            .builder(kind, node)
            .field("operator", operator)
            .field("left", self.child(node, "left")?)
            .field("right", self.child(node, "right")?)
            .build())
    }

    fn update(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let prefix = match (
            node.child_by_field_name("operator"),
            node.child_by_field_name("argument"),
        ) {
            (Some(operator), Some(argument)) => operator.start_byte() < argument.start_byte(),
            _ => false,
        };
        Ok(self
            .builder(NodeKind::UpdateExpression, node)
            .field("operator", self.field_text(node, "operator"))
            .field("prefix", prefix)
            .field("argument", self.child(node, "argument")?)
            .build())
    }

    /// Lowers a grammar kind with no ESTree mapping.
    fn generic(&self, node: TsNode<'_>) -> Result<Node, ParseError> {
        let mut fields: Vec<(String, Value)> = Vec::new();
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                if child.is_named() && !child.is_extra() {
                    let name = cursor.field_name().map_or_else(|| "children".to_owned(), camel_case);
                    let lowered = Value::from(self.lower(child)?);
                    push_field(&mut fields, name, lowered, cursor.field_name().is_none());
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        if fields.is_empty() {
            fields.push(("raw".to_owned(), Value::from(self.text(node))));
        }
        let builder = fields.into_iter().fold(
            self.builder(NodeKind::from(pascal_case(node.kind())), node),
            |builder, (name, value)| builder.field(name, value),
        );
        Ok(builder.build())
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PropertyFlags {
    method: bool,
    shorthand: bool,
    computed: bool,
}

/// Adds a generic field, turning repeated fields into lists.
fn push_field(fields: &mut Vec<(String, Value)>, name: String, value: Value, always_list: bool) {
    match fields.iter_mut().find(|(field, _)| *field == name) {
        Some((_, Value::Array(items))) => items.push(value),
        Some((_, slot)) => {
            let first = std::mem::replace(slot, Value::Null);
            *slot = Value::Array(vec![first, value]);
        }
        None if always_list => fields.push((name, Value::Array(vec![value]))),
        None => fields.push((name, value)),
    }
}

/// Returns the named children of `node` that are not comments.
fn named_children(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

/// Returns the statements of a program or block, skipping a hashbang line.
fn statements(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    named_children(node)
        .into_iter()
        .filter(|child| child.kind() != "hash_bang_line")
        .collect()
}

fn first_child(node: TsNode<'_>) -> Option<TsNode<'_>> {
    let mut cursor = node.walk();
    cursor.goto_first_child().then(|| cursor.node())
}

fn child_of_kind<'tree>(node: TsNode<'tree>, kind: &str) -> Option<TsNode<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Returns whether `node` is the anonymous declaration of an
/// `export default` statement.
fn is_exported(node: TsNode<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| parent.kind() == "export_statement")
}

fn has_token(node: TsNode<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

fn ranges(items: &[TsNode<'_>]) -> Vec<Range<usize>> {
    items.iter().map(TsNode::byte_range).collect()
}

/// Records a list between the braces that open and close `owner`.
fn delimited_layout(
    field: &str,
    owner: TsNode<'_>,
    items: &[TsNode<'_>],
    separator: ListSeparator,
) -> ListLayout {
    let start = owner.start_byte().saturating_add(1);
    let end = owner.end_byte().saturating_sub(1).max(start);
    ListLayout::new(field, start..end, ranges(items), separator, true)
}

fn pascal_case(kind: &str) -> String {
    kind.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let pascal = pascal_case(field);
    let mut chars = pascal.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
