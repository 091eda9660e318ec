//! Tests for [`Collection`](crate::Collection) search, selection, and
//! printing.

use std::io;

use rstest::{fixture, rstest};

use super::fakes::{program, scripted_engine, statement};
use crate::{
    Engine, EngineConfig, GraftError, Index, Node, NodeKind, SearchOptions, Value,
};

#[fixture]
fn engine() -> Engine {
    Engine::default()
}

const NESTED: &str = "function a() {\n  function b() {\n    return 1;\n  }\n}\nfunction c() {}\n";

fn names(nodes: &[Node]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(|node| node.child("id").and_then(|id| id.str_field("name")))
        .collect()
}

#[rstest]
fn always_false_predicates_find_nothing(engine: Engine) {
    let tree = engine.load(NESTED).expect("load");
    let found = tree.search(|_, _| false).expect("search");
    assert!(found.is_empty());
}

#[rstest]
fn always_true_predicates_find_every_distinct_node(engine: Engine) {
    let tree = engine.load(NESTED).expect("load");
    let root = tree.first().expect("root").clone();

    let found = tree.search(|_, _| true).expect("search");

    assert_eq!(found.len(), Index::build(&root).len());
    assert_eq!(found.first(), Some(&root));
}

#[rstest]
fn shared_nodes_are_found_once(engine: Engine) {
    let shared = Node::builder(NodeKind::Literal).field("value", 1.0).build();
    let root = program(vec![statement(shared.clone()), statement(shared.clone())]);
    let found = engine
        .collection(vec![root])
        .search(|entry, _| entry.node() == &shared)
        .expect("search");
    assert_eq!(found.len(), 1);
}

#[rstest]
fn parents_contain_their_children(engine: Engine) {
    let tree = engine.load(NESTED).expect("load");
    tree.search(|entry, parent| {
        if let Some(owner) = parent {
            assert!(owner.node().children().contains(entry.node()));
        }
        false
    })
    .expect("search");
}

#[rstest]
fn selectors_pick_functions_in_pre_order(engine: Engine) {
    let tree = engine.load(NESTED).expect("load");
    let functions = tree.select("FunctionDeclaration").expect("select");
    assert_eq!(names(functions.nodes()), vec!["a", "b", "c"]);
}

#[rstest]
#[case("FunctionDeclaration[id.name=a]", 1)]
#[case("FunctionDeclaration[id.name=c]", 0)]
fn chained_searches_stay_below_earlier_matches(
    engine: Engine,
    #[case] outer: &str,
    #[case] returns: usize,
) {
    let tree = engine.load(NESTED).expect("load");
    let found = tree
        .select(outer)
        .expect("outer")
        .search(|entry, _| entry.is("ReturnStatement"))
        .expect("inner");
    assert_eq!(found.len(), returns);
}

#[rstest]
fn chained_searches_concatenate_per_root(engine: Engine) {
    let tree = engine.load(NESTED).expect("load");
    let returns = tree
        .select("FunctionDeclaration")
        .expect("functions")
        .select("ReturnStatement")
        .expect("returns");
    assert_eq!(returns.len(), 2);
    assert_eq!(returns.get(0), returns.get(1));
}

#[rstest]
fn malformed_selectors_are_invalid_predicates(engine: Engine) {
    let tree = engine.load(NESTED).expect("load");
    let error = tree.select("FunctionDeclaration[").expect_err("invalid");
    assert!(matches!(error, GraftError::InvalidPredicate { .. }));
}

#[test]
fn configured_throw_errors_abort_searches() {
    let config = EngineConfig::default().with_search(SearchOptions::new(true));
    let engine = Engine::new(config);
    let tree = engine.load("a();").expect("load");

    let error = tree
        .search(|_, _| Err::<bool, _>(io::Error::other("boom")))
        .expect_err("predicate error");

    assert!(matches!(
        error,
        GraftError::Predicate { position: 0, ref kind, .. } if *kind == NodeKind::Program
    ));
}

#[rstest]
fn failing_predicates_are_skipped_by_default(engine: Engine) {
    let tree = engine.load("a();").expect("load");
    let found = tree
        .search(|entry, _| {
            if entry.is("Program") {
                return Err(io::Error::other("boom"));
            }
            Ok(entry.is("CallExpression"))
        })
        .expect("search");
    assert_eq!(found.len(), 1);
}

#[rstest]
fn explicit_options_override_the_engine(engine: Engine) {
    let tree = engine.load("a();").expect("load");
    let outcome = tree.search_with(&SearchOptions::new(true), |_, _| {
        Err::<bool, _>(io::Error::other("boom"))
    });
    assert!(outcome.is_err());
}

#[rstest]
fn empty_collections_search_to_empty_collections(engine: Engine) {
    let empty = engine.collection(Vec::new());
    assert!(empty.search(|_, _| true).expect("search").is_empty());
}

#[rstest]
fn printing_an_empty_collection_has_no_tree(engine: Engine) {
    let error = engine.collection(Vec::new()).print().expect_err("no tree");
    assert!(matches!(error, GraftError::NoTree));
}

#[test]
fn printing_joins_roots_with_the_line_terminator() {
    let (engine, _) = scripted_engine(|_| Ok(program(Vec::new())));
    let roots = vec![
        Node::new(NodeKind::Identifier),
        Node::builder(NodeKind::ArrayExpression)
            .field("elements", vec![Value::from(Node::new(NodeKind::Literal))])
            .build(),
    ];
    let printed = engine.collection(roots).print().expect("print");
    assert_eq!(printed, "Identifier\nArrayExpression Literal");
}

#[rstest]
fn collections_iterate_their_roots(engine: Engine) {
    let tree = engine.load(NESTED).expect("load");
    let functions = tree.select("FunctionDeclaration").expect("select");
    let by_ref: Vec<&Node> = (&functions).into_iter().collect();
    assert_eq!(by_ref.len(), 3);
    let owned: Vec<Node> = functions.clone().into_iter().collect();
    assert_eq!(owned, functions.into_nodes());
}
