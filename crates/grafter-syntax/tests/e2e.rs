//! End-to-end tests for grafter-syntax using insta for snapshot testing.
//!
//! These tests exercise the public port implementations together, with
//! snapshots for the stable outputs: lowered trees, printed text, and error
//! messages.

use std::path::Path;

use insta::assert_snapshot;
use rstest::rstest;
use serde_json::json;

use grafter_core::{
    LiteralStringifier, PrintOptions, SourceParser, SourcePrinter, StringifyOptions,
};
use grafter_syntax::{Dialect, EstreeParser, JsonStringifier, Reprinter};

fn to_pretty_json(source: &str) -> String {
    let tree = EstreeParser::default()
        .parse(source)
        .unwrap_or_else(|err| panic!("parse: {err}"));
    serde_json::to_string_pretty(&tree.to_json()).unwrap_or_else(|err| panic!("json: {err}"))
}

#[test]
fn snapshot_lowered_declaration() {
    assert_snapshot!(to_pretty_json("const x = 1;"), @r#"
    {
      "type": "Program",
      "body": [
        {
          "type": "VariableDeclaration",
          "declarations": [
            {
              "type": "VariableDeclarator",
              "id": {
                "type": "Identifier",
                "name": "x"
              },
              "init": {
                "type": "Literal",
                "raw": "1",
                "value": 1
              }
            }
          ],
          "kind": "const"
        }
      ],
      "sourceType": "module"
    }
    "#);
}

#[test]
fn snapshot_lowered_object_property() {
    assert_snapshot!(to_pretty_json("({and: \"desert\"});"), @r#"
    {
      "type": "Program",
      "body": [
        {
          "type": "ExpressionStatement",
          "expression": {
            "type": "ObjectExpression",
            "properties": [
              {
                "type": "Property",
                "key": {
                  "type": "Identifier",
                  "name": "and"
                },
                "value": {
                  "type": "Literal",
                  "raw": "\"desert\"",
                  "value": "desert"
                },
                "kind": "init",
                "method": false,
                "shorthand": false,
                "computed": false
              }
            ]
          }
        }
      ],
      "sourceType": "module"
    }
    "#);
}

#[test]
fn snapshot_stray_token_error() {
    let error = EstreeParser::default()
        .parse("let x = 1;\n)")
        .expect_err("syntax error");
    assert_snapshot!(error.to_string(), @"unexpected token `)` at 2:1");
}

#[test]
fn snapshot_dialect_detection() {
    let files = ["app.js", "app.jsx", "lib.mts", "view.tsx", "data.json"];
    let detected: Vec<String> = files
        .iter()
        .map(|file| {
            let dialect = Dialect::from_path(Path::new(file))
                .map_or_else(|| "-".to_owned(), |found| found.to_string());
            format!("{file}: {dialect}")
        })
        .collect();
    assert_snapshot!(detected.join("\n"), @r"
    app.js: javascript
    app.jsx: javascript
    lib.mts: typescript
    view.tsx: tsx
    data.json: -
    ");
}

#[test]
fn snapshot_stringified_object() {
    let text = JsonStringifier::new()
        .stringify(
            &json!({"name": "grafter", "tags": ["ast", "edit"]}),
            &StringifyOptions::new(4),
        )
        .unwrap_or_else(|err| panic!("stringify: {err}"));
    assert_snapshot!(text, @r#"
    {
        "name": "grafter",
        "tags": [
            "ast",
            "edit"
        ]
    }
    "#);
}

#[rstest]
#[case("function f() {\n  return g(1, 2);\n}\n")]
#[case("export const answer = 42;\n")]
#[case("import { a } from \"b\";\nclass C extends D {\n  #secret = 1;\n  static get x() { return 1; }\n}\n")]
#[case("const f = async (a, ...rest) => a ?? rest[0];")]
#[case("for (const item of items) {\n  if (!item) continue;\n}\n")]
fn parsed_source_round_trips(#[case] source: &str) {
    let tree = EstreeParser::default()
        .parse(source)
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let printed = Reprinter::new()
        .print(&tree, &PrintOptions::default())
        .unwrap_or_else(|err| panic!("print: {err}"));
    assert_eq!(printed, source);
}

#[test]
fn appended_value_prints_inside_the_program() {
    let parser = EstreeParser::default();
    let tree = parser
        .parse("first();\nsecond();\n")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    let text = JsonStringifier::new()
        .stringify(&json!(42), &StringifyOptions::default())
        .unwrap_or_else(|err| panic!("stringify: {err}"));
    let fragment = parser
        .parse(&text)
        .unwrap_or_else(|err| panic!("parse: {err}"));
    assert!(tree.insert_items("body", 1, fragment.list("body").unwrap_or_default()));

    let printed = Reprinter::new()
        .print(&tree, &PrintOptions::default())
        .unwrap_or_else(|err| panic!("print: {err}"));
    assert_eq!(printed.matches('\n').count(), 3);
    assert_snapshot!(printed.trim_end(), @r"
    first();
    42
    second();
    ");
}
