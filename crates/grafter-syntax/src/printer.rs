//! Span-reusing implementation of the printer port.
//!
//! [`Reprinter`] reproduces parsed source text byte for byte wherever the
//! tree is unchanged. Only nodes whose subtree contains a modified list are
//! re-rendered: their original text is kept and the changed regions are
//! patched in. A modified list is re-rendered from its items, reusing the
//! original text between items that are still neighbours and the list's
//! indentation and separator style elsewhere.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use grafter_core::{
    GraftError, ListLayout, ListSeparator, Node, NodeId, NodeKind, Origin, PrintOptions,
    SourcePrinter, Value,
};
use tracing::debug;

use crate::position::line_indent;

const PRINT_TARGET: &str = "grafter::print";

/// Prints trees produced by [`EstreeParser`](crate::EstreeParser).
///
/// Every node that must be rendered needs an origin; hand-built nodes
/// without one cannot be printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reprinter;

impl Reprinter {
    /// Creates a printer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SourcePrinter for Reprinter {
    fn print(&self, root: &Node, options: &PrintOptions) -> Result<String, GraftError> {
        let mut render = Render::new(options);
        let text = render.node(root)?;
        debug!(
            target: PRINT_TARGET,
            kind = %root.kind(),
            bytes = text.len(),
            rerendered = render.rerendered,
            "printed tree"
        );
        Ok(text)
    }
}

/// A replacement of `range` in the owner's source with `text`.
#[derive(Debug)]
struct Edit {
    range: Range<usize>,
    text: String,
}

struct Render<'opts> {
    options: &'opts PrintOptions,
    dirty: HashMap<NodeId, bool>,
    visiting: HashSet<NodeId>,
    rendering: HashSet<NodeId>,
    rerendered: usize,
}

impl<'opts> Render<'opts> {
    fn new(options: &'opts PrintOptions) -> Self {
        Self {
            options,
            dirty: HashMap::new(),
            visiting: HashSet::new(),
            rendering: HashSet::new(),
            rerendered: 0,
        }
    }

    /// Returns whether `node` or any descendant has a modified field.
    fn is_dirty(&mut self, node: &Node) -> bool {
        let id = node.id();
        if let Some(known) = self.dirty.get(&id) {
            return *known;
        }
        if !self.visiting.insert(id) {
            return false;
        }
        let dirty =
            node.is_modified() || node.children().iter().any(|child| self.is_dirty(child));
        self.visiting.remove(&id);
        self.dirty.insert(id, dirty);
        dirty
    }

    fn node(&mut self, node: &Node) -> Result<String, GraftError> {
        let origin = node
            .origin()
            .ok_or_else(|| GraftError::print(format!("{} node has no source text", node.kind())))?;
        if !self.is_dirty(node) {
            return Ok(origin.text().to_owned());
        }
        if !self.rendering.insert(node.id()) {
            return Err(GraftError::print(format!(
                "{} node contains itself",
                node.kind()
            )));
        }
        let patched = self.patch(node, &origin);
        self.rendering.remove(&node.id());
        self.rerendered = self.rerendered.saturating_add(1);
        patched
    }

    /// Renders a dirty node by patching its original text.
    fn patch(&mut self, node: &Node, origin: &Origin) -> Result<String, GraftError> {
        let mut edits = Vec::new();
        for (name, value) in node.fields() {
            if node.is_field_modified(&name) {
                let layout = origin.list(&name).ok_or_else(|| {
                    GraftError::print(format!(
                        "modified `{name}` of {} has no recorded layout",
                        node.kind()
                    ))
                })?;
                let items = value.as_array().unwrap_or_default();
                edits.push(self.list(origin, layout, items)?);
            } else {
                self.child_edits(&value, origin, &mut edits)?;
            }
        }
        splice(origin, edits)
    }

    fn child_edits(
        &mut self,
        value: &Value,
        origin: &Origin,
        edits: &mut Vec<Edit>,
    ) -> Result<(), GraftError> {
        match value {
            Value::Node(child) if self.is_dirty(child) => {
                let range = child
                    .origin()
                    .filter(|placed| placed.same_source(origin) && origin.contains(&placed.range()))
                    .map(|placed| placed.range())
                    .ok_or_else(|| {
                        GraftError::print(format!(
                            "modified {} node lies outside its parent's text",
                            child.kind()
                        ))
                    })?;
                let text = self.node(child)?;
                edits.push(Edit { range, text });
                Ok(())
            }
            Value::Array(items) => items
                .iter()
                .try_for_each(|item| self.child_edits(item, origin, edits)),
            _ => Ok(()),
        }
    }

    /// Re-renders a modified list.
    fn list(
        &mut self,
        origin: &Origin,
        layout: &ListLayout,
        items: &[Value],
    ) -> Result<Edit, GraftError> {
        let source = origin.source();
        let inner = layout.inner();
        let nodes: Vec<Node> = items.iter().filter_map(Value::as_node).cloned().collect();

        if let Some(span) = layout.span() {
            if nodes.is_empty() {
                let range = if layout.delimited() { inner } else { span };
                return Ok(Edit {
                    range,
                    text: String::new(),
                });
            }
            let multiline = !layout.delimited() || slice(source, inner)?.contains('\n');
            let indent = line_indent(source, span.start).to_owned();
            let text = self.join(&nodes, origin, layout, &indent, multiline)?;
            return Ok(Edit { range: span, text });
        }

        if nodes.is_empty() {
            return Ok(Edit {
                range: inner.end..inner.end,
                text: String::new(),
            });
        }

        let terminator = self.options.line_terminator().to_owned();
        if !layout.delimited() {
            let text = self.join(&nodes, origin, layout, "", true)?;
            let before = slice(source, origin.range().start..inner.end)?;
            let lead = if before.is_empty() || before.ends_with('\n') {
                ""
            } else {
                terminator.as_str()
            };
            return Ok(Edit {
                range: inner.end..inner.end,
                text: format!("{lead}{text}"),
            });
        }

        let outer = line_indent(source, origin.range().start).to_owned();
        let indent = format!("{outer}{}", self.options.indent_unit());
        let text = match layout.separator() {
            ListSeparator::Newline => {
                let body = self.join(&nodes, origin, layout, &indent, true)?;
                format!("{terminator}{indent}{body}{terminator}{outer}")
            }
            ListSeparator::Comma => {
                let body = self.join(&nodes, origin, layout, &indent, false)?;
                format!(" {body} ")
            }
        };
        Ok(Edit { range: inner, text })
    }

    fn join(
        &mut self,
        nodes: &[Node],
        origin: &Origin,
        layout: &ListLayout,
        indent: &str,
        multiline: bool,
    ) -> Result<String, GraftError> {
        let mut out = String::new();
        let mut previous: Option<&Node> = None;
        for node in nodes {
            let text = self.item(node, origin, indent)?;
            if let Some(before) = previous {
                let gap = original_gap(before, node, origin, layout).unwrap_or_else(|| {
                    let separator = self.separator(layout.separator(), indent, multiline);
                    let terminate = layout.separator() == ListSeparator::Newline
                        && needs_terminator(before, &out, &text, multiline);
                    if terminate {
                        format!(";{separator}")
                    } else {
                        separator
                    }
                });
                out.push_str(&gap);
            }
            out.push_str(&text);
            previous = Some(node);
        }
        Ok(out)
    }

    fn separator(&self, separator: ListSeparator, indent: &str, multiline: bool) -> String {
        let terminator = self.options.line_terminator();
        match (separator, multiline) {
            (ListSeparator::Newline, true) => format!("{terminator}{indent}"),
            (ListSeparator::Newline, false) => " ".to_owned(),
            (ListSeparator::Comma, true) => format!(",{terminator}{indent}"),
            (ListSeparator::Comma, false) => ", ".to_owned(),
        }
    }

    /// Renders one list item, re-indenting text that came from elsewhere.
    fn item(&mut self, node: &Node, origin: &Origin, indent: &str) -> Result<String, GraftError> {
        let text = self.node(node)?;
        match node.origin() {
            Some(placed) if !placed.same_source(origin) => {
                let base = line_indent(placed.source(), placed.range().start);
                Ok(reindent(&text, base, indent))
            }
            _ => Ok(text),
        }
    }
}

/// Returns the source text between two items that were neighbours when
/// parsed.
fn original_gap(before: &Node, after: &Node, origin: &Origin, layout: &ListLayout) -> Option<String> {
    let first = before.origin().filter(|placed| placed.same_source(origin))?;
    let second = after.origin().filter(|placed| placed.same_source(origin))?;
    let adjacent = layout
        .items()
        .windows(2)
        .any(|pair| matches!(pair, [a, b] if *a == first.range() && *b == second.range()));
    if !adjacent {
        return None;
    }
    origin
        .source()
        .get(first.range().end..second.range().start)
        .map(str::to_owned)
}

/// Returns whether a statement ending `so_far` must be closed with `;`
/// before `next` is placed after it.
///
/// Statements on one line always need the terminator. On separate lines
/// only a `next` that would continue the previous expression needs it.
fn needs_terminator(before: &Node, so_far: &str, next: &str, multiline: bool) -> bool {
    let text = so_far.trim_end();
    if text.is_empty() || text.ends_with(';') {
        return false;
    }
    if text.ends_with('}') && ends_with_block(before) {
        return false;
    }
    !multiline || next.starts_with(['(', '[', '`', '+', '-', '/'])
}

/// Returns whether `node` ends with a closing brace that ends a statement.
fn ends_with_block(node: &Node) -> bool {
    match node.kind() {
        NodeKind::BlockStatement
        | NodeKind::FunctionDeclaration
        | NodeKind::ClassDeclaration
        | NodeKind::MethodDefinition
        | NodeKind::TryStatement
        | NodeKind::SwitchStatement => true,
        NodeKind::IfStatement => node
            .child("alternate")
            .or_else(|| node.child("consequent"))
            .is_some_and(|tail| ends_with_block(&tail)),
        NodeKind::ForStatement
        | NodeKind::ForInStatement
        | NodeKind::ForOfStatement
        | NodeKind::WhileStatement
        | NodeKind::LabeledStatement => node
            .child("body")
            .is_some_and(|tail| ends_with_block(&tail)),
        _ => false,
    }
}

/// Moves every line after the first from `base` indentation to `indent`.
fn reindent(text: &str, base: &str, indent: &str) -> String {
    let mut lines = text.split('\n');
    let mut out = lines.next().unwrap_or_default().to_owned();
    for line in lines {
        out.push('\n');
        if !line.trim().is_empty() {
            out.push_str(indent);
        }
        out.push_str(line.strip_prefix(base).unwrap_or(line));
    }
    out
}

fn slice(source: &str, range: Range<usize>) -> Result<&str, GraftError> {
    source.get(range.clone()).ok_or_else(|| {
        GraftError::print(format!(
            "source range {}..{} is not on character boundaries",
            range.start, range.end
        ))
    })
}

/// Applies edits to the owner's original text.
///
/// Repeated identical edits apply once. Any other overlap, or an edit
/// reaching past the owner, is an error.
fn splice(origin: &Origin, mut edits: Vec<Edit>) -> Result<String, GraftError> {
    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));
    edits.dedup_by(|next, kept| next.range == kept.range && next.text == kept.text);
    let source = origin.source();
    let owner = origin.range();
    let mut out = String::with_capacity(owner.len());
    let mut cursor = owner.start;
    for edit in edits {
        if edit.range.start < cursor || edit.range.end > owner.end {
            return Err(GraftError::print(format!(
                "edit at {}..{} overlaps another edit or leaves {}..{}",
                edit.range.start, edit.range.end, owner.start, owner.end
            )));
        }
        out.push_str(slice(source, cursor..edit.range.start)?);
        out.push_str(&edit.text);
        cursor = edit.range.end;
    }
    out.push_str(slice(source, cursor..owner.end)?);
    Ok(out)
}
