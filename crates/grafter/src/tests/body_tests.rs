//! Tests for body splices.

use rstest::{fixture, rstest};
use serde_json::json;

use super::fakes::first_statement;
use crate::{literal_value, property_key, Engine, GraftError, Node, NodeKind, Source, Value};

#[fixture]
fn engine() -> Engine {
    Engine::default()
}

fn body_kinds(owner: &Node) -> Vec<NodeKind> {
    owner
        .body_owner()
        .and_then(|body| body.list("body"))
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_node)
        .map(Node::kind)
        .collect()
}

#[rstest]
fn appending_to_an_empty_tree(engine: Engine) {
    let tree = engine.load("").expect("load");
    assert!(tree.append("function f(){}").expect("append"));
    assert!(tree.print().expect("print").contains("function f(){}"));
}

#[rstest]
fn appending_a_value_at_an_index(engine: Engine) {
    let tree = engine.load("first();\nsecond();\n").expect("load");

    assert!(tree.append_at(json!(42), 1).expect("append"));

    let root = tree.first().expect("root");
    let inserted = root
        .list("body")
        .and_then(|body| body.get(1).and_then(Value::as_node).cloned())
        .expect("body[1]");
    assert!(inserted.is(&NodeKind::ExpressionStatement));
    assert_eq!(literal_value(&inserted), Some(json!(42)));
    assert_eq!(tree.print().expect("print"), "first();\n42\nsecond();\n");
}

#[rstest]
fn appended_objects_keep_their_key_order(engine: Engine) {
    let tree = engine.load("first();\nsecond();\n").expect("load");

    let value = Source::from(json!([{"zeta": 1, "alpha": 2}]));
    assert!(tree.append_at(value, 1).expect("append"));

    let object = tree
        .first()
        .and_then(|root| root.list("body"))
        .and_then(|body| body.get(1).and_then(Value::as_node).cloned())
        .and_then(|statement| statement.child("expression"))
        .and_then(|array| array.list("elements"))
        .and_then(|elements| elements.first().and_then(Value::as_node).cloned())
        .expect("inserted object");
    let keys: Vec<String> = object
        .list("properties")
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_node)
        .filter_map(|property| property.child("key"))
        .filter_map(|key| property_key(&key))
        .collect();
    assert_eq!(keys, ["zeta", "alpha"]);

    let printed = tree.print().expect("print");
    let zeta = printed.find("\"zeta\"").expect("zeta printed");
    let alpha = printed.find("\"alpha\"").expect("alpha printed");
    assert!(zeta < alpha, "{printed}");
}

#[rstest]
#[case::append(false, None, "a();\nb();\nx();")]
#[case::prepend(true, None, "x();\na();\nb();")]
#[case::prepend_at(true, Some(1), "a();\nx();\nb();")]
#[case::append_past_the_end(false, Some(9), "a();\nb();\nx();")]
fn splice_points(
    engine: Engine,
    #[case] prepend: bool,
    #[case] index: Option<usize>,
    #[case] expected: &str,
) {
    let tree = engine.load("a();\nb();").expect("load");
    let accepted = match (prepend, index) {
        (false, None) => tree.append("x();"),
        (true, None) => tree.prepend("x();"),
        (false, Some(at)) => tree.append_at("x();", at),
        (true, Some(at)) => tree.prepend_at("x();", at),
    }
    .expect("splice");
    assert!(accepted);
    assert_eq!(tree.print().expect("print"), expected);
}

#[rstest]
fn function_targets_splice_into_their_block(engine: Engine) {
    let tree = engine.load("function f() {\n  a();\n}").expect("load");
    let functions = tree.select("FunctionDeclaration").expect("select");

    assert!(functions.prepend("z();").expect("prepend"));

    let function = functions.first().expect("function");
    assert_eq!(
        body_kinds(function),
        vec![NodeKind::ExpressionStatement, NodeKind::ExpressionStatement]
    );
    assert_eq!(
        tree.print().expect("print"),
        "function f() {\n  z();\n  a();\n}"
    );
}

#[rstest]
fn targets_without_a_body_are_refused(engine: Engine) {
    let tree = engine.load("let x = 1;").expect("load");
    let literals = tree.select("Literal").expect("select");

    assert!(!literals.append("y();").expect("append"));
    assert_eq!(tree.print().expect("print"), "let x = 1;");
}

#[rstest]
fn mixed_targets_report_failure_but_edit_the_rest(engine: Engine) {
    let tree = engine.load("function f() {}\nlet x = 1;").expect("load");
    let mixed = tree
        .search(|entry, _| entry.is("FunctionDeclaration") || entry.is("Literal"))
        .expect("search");
    assert_eq!(mixed.len(), 2);

    assert!(!mixed.append("y();").expect("append"));

    let function = mixed.first().expect("function");
    assert_eq!(body_kinds(function), vec![NodeKind::ExpressionStatement]);
}

#[rstest]
fn empty_collections_accept_nothing(engine: Engine) {
    assert!(!engine.collection(Vec::new()).append("y();").expect("append"));
}

#[rstest]
fn every_target_gets_its_own_statements(engine: Engine) {
    let tree = engine.load("function f() {}\nfunction g() {}").expect("load");
    let functions = tree.select("FunctionDeclaration").expect("select");

    assert!(functions.append("x();").expect("append"));

    let appended: Vec<Node> = functions
        .iter()
        .filter_map(|function| function.body_owner())
        .filter_map(|block| block.list("body"))
        .filter_map(|body| body.first().and_then(Value::as_node).cloned())
        .collect();
    assert_eq!(appended.len(), 2);
    assert_ne!(appended.first(), appended.get(1));
}

#[rstest]
fn null_values_splice_nothing(engine: Engine) {
    let tree = engine.load("a();").expect("load");
    assert!(tree.append(Source::Value(json!(null))).expect("append"));
    assert_eq!(body_kinds(tree.first().expect("root")).len(), 1);
}

#[rstest]
fn unparsable_sources_are_errors(engine: Engine) {
    let tree = engine.load("a();").expect("load");
    let error = tree.append("let = ;").expect_err("parse error");
    assert!(matches!(error, GraftError::Parse(_)));
    assert!(first_statement(tree.first().expect("root")).is(&NodeKind::ExpressionStatement));
}
