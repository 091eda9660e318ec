//! Tests for [`Reprinter`] on parsed and edited trees.

use grafter_core::{
    search, LiteralStringifier, Node, NodeKind, PrintOptions, SearchOptions, SourceParser,
    SourcePrinter, StringifyOptions, Value,
};
use rstest::rstest;
use serde_json::json;

use crate::{EstreeParser, JsonStringifier, Reprinter};

fn parse(text: &str) -> Node {
    EstreeParser::default().parse(text).expect("parse")
}

fn print(tree: &Node) -> String {
    Reprinter::new()
        .print(tree, &PrintOptions::default())
        .expect("print")
}

fn statements(text: &str) -> Vec<Value> {
    parse(text).list("body").expect("body")
}

fn first_of(tree: &Node, kind: NodeKind) -> Node {
    search(Some(tree), &SearchOptions::default(), |entry, _| {
        entry.kind() == &kind
    })
    .expect("search")
    .into_iter()
    .next()
    .unwrap_or_else(|| panic!("no {kind} node"))
}

/// Parses `{name: value}` the way a property write does.
fn properties(value: &serde_json::Value) -> Vec<Value> {
    let text = JsonStringifier::new()
        .stringify(value, &StringifyOptions::default())
        .expect("stringify");
    let wrapped = parse(&format!("({text})"));
    first_of(&wrapped, NodeKind::ObjectExpression)
        .list("properties")
        .expect("properties")
}

#[rstest]
#[case("")]
#[case("a();\n")]
#[case("// header\nconst x = {and: \"desert\"};\n\n\nfunction main() {\n  return 1; // one\n}\n")]
#[case("class A {\n  run() {}\n}")]
#[case("let n = [1, 2, 3]")]
fn unmodified_trees_print_verbatim(#[case] source: &str) {
    assert_eq!(print(&parse(source)), source);
}

#[test]
fn appending_to_an_empty_program() {
    let tree = parse("");
    assert!(tree.insert_items("body", usize::MAX, statements("function f(){}")));
    assert_eq!(print(&tree), "function f(){}");
}

#[test]
fn appending_after_a_statement_without_a_newline() {
    let tree = parse("a();");
    assert!(tree.insert_items("body", usize::MAX, statements("b();")));
    assert_eq!(print(&tree), "a();\nb();");
}

#[test]
fn inserting_between_statements_uses_plain_separators() {
    let tree = parse("a();\n\n// keep\nb();\n");
    assert!(tree.insert_items("body", 1, statements("42")));
    assert_eq!(print(&tree), "a();\n42\nb();\n");
}

#[test]
fn untouched_neighbours_keep_their_gap() {
    let tree = parse("a();\n\n// keep\nb();\n");
    assert!(tree.insert_items("body", 0, statements("z();")));
    assert_eq!(print(&tree), "z();\na();\n\n// keep\nb();\n");
}

#[test]
fn block_bodies_take_the_existing_indentation() {
    let tree = parse("function f() {\n  a();\n}\n");
    let block = first_of(&tree, NodeKind::BlockStatement);
    assert!(block.insert_items("body", usize::MAX, statements("b();")));
    assert_eq!(print(&tree), "function f() {\n  a();\n  b();\n}\n");
}

#[test]
fn empty_blocks_are_opened_up() {
    let tree = parse("function f() {}");
    let block = first_of(&tree, NodeKind::BlockStatement);
    assert!(block.insert_items("body", 0, statements("b();")));
    assert_eq!(print(&tree), "function f() {\n    b();\n}");
}

#[test]
fn empty_blocks_honour_tab_options() {
    let tree = parse("function f() {}");
    let block = first_of(&tree, NodeKind::BlockStatement);
    assert!(block.insert_items("body", 0, statements("b();")));
    let options = PrintOptions::new(2, true, "\r\n");
    let printed = Reprinter::new().print(&tree, &options).expect("print");
    assert_eq!(printed, "function f() {\r\n\tb();\r\n}");
}

#[rstest]
#[case("function f() { a() }", "function f() { a(); b(); }")]
#[case("function f() { if (x) {} }", "function f() { if (x) {} b(); }")]
#[case("function f() { if (x) y = {} }", "function f() { if (x) y = {}; b(); }")]
#[case("function f() { a(); }", "function f() { a(); b(); }")]
fn statements_sharing_a_line_are_terminated(#[case] source: &str, #[case] expected: &str) {
    let tree = parse(source);
    let block = first_of(&tree, NodeKind::BlockStatement);
    assert!(block.insert_items("body", usize::MAX, statements("b();")));

    let printed = print(&tree);
    assert_eq!(printed, expected);
    assert!(EstreeParser::default().parse(&printed).is_ok(), "{printed}");
}

#[test]
fn statements_that_would_continue_a_line_are_terminated() {
    let tree = parse("a()\n");
    assert!(tree.insert_items("body", usize::MAX, statements("(b)")));
    assert_eq!(print(&tree), "a();\n(b)\n");
}

#[test]
fn multi_line_fragments_are_reindented() {
    let tree = parse("if (x) {\n  a();\n}\n");
    let block = first_of(&tree, NodeKind::BlockStatement);
    let fragment = statements("function g() {\n  return 1;\n}");
    assert!(block.insert_items("body", usize::MAX, fragment));
    assert_eq!(
        print(&tree),
        "if (x) {\n  a();\n  function g() {\n    return 1;\n  }\n}\n"
    );
}

#[test]
fn single_line_objects_stay_single_line() {
    let tree = parse("const x = {and: \"desert\"};");
    let object = first_of(&tree, NodeKind::ObjectExpression);
    assert!(object.insert_items(
        "properties",
        usize::MAX,
        properties(&json!({"desert": "you"}))
    ));
    assert_eq!(print(&tree), "const x = {and: \"desert\", \"desert\": \"you\"};");
}

#[test]
fn multi_line_objects_get_one_property_per_line() {
    let tree = parse("const x = {\n  a: 1,\n};");
    let object = first_of(&tree, NodeKind::ObjectExpression);
    assert!(object.insert_items("properties", usize::MAX, properties(&json!({"b": 2}))));
    assert_eq!(print(&tree), "const x = {\n  a: 1,\n  \"b\": 2,\n};");
}

#[test]
fn empty_objects_gain_padded_properties() {
    let tree = parse("const o = {};");
    let object = first_of(&tree, NodeKind::ObjectExpression);
    assert!(object.insert_items("properties", 0, properties(&json!({"a": 1}))));
    assert_eq!(print(&tree), "const o = { \"a\": 1 };");
}

#[rstest]
#[case(&["a"], "const o = {b: 2};")]
#[case(&["a", "b"], "const o = {};")]
fn removing_properties_closes_the_gap(#[case] names: &[&str], #[case] expected: &str) {
    let tree = parse("const o = {a: 1, b: 2};");
    let object = first_of(&tree, NodeKind::ObjectExpression);
    let removed = object.remove_items("properties", |item| {
        item.as_node()
            .and_then(|property| property.child("key"))
            .and_then(|key| key.str_field("name"))
            .is_some_and(|name| names.contains(&name.as_str()))
    });
    assert_eq!(removed, Some(names.len()));
    assert_eq!(print(&tree), expected);
}

#[test]
fn hand_built_nodes_cannot_be_printed() {
    let tree = parse("a();");
    let bare = Node::builder(NodeKind::EmptyStatement).build();
    assert!(tree.insert_items("body", 0, vec![Value::from(bare)]));
    let error = Reprinter::new()
        .print(&tree, &PrintOptions::default())
        .expect_err("no origin");
    assert!(error.to_string().contains("no source text"), "{error}");
}
