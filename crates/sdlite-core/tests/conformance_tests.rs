// SDLite - Simple Declarative Language for Rust
//
// Copyright (c) 2025 SDLite contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SDLang conformance tests.
//!
//! End-to-end checks of the public parsing surface: statement shapes,
//! value decoding through the parser, error messages, and the streaming
//! callback contract.

use sdlite_core::{parse, Node, SdlErrorKind, SdlResult, Timezone, Value, ANONYMOUS_NAME};

fn parse_all(input: &str) -> SdlResult<Vec<Node>> {
    let mut nodes = Vec::new();
    parse(input, "test.sdl", |node| {
        nodes.push(node);
        Ok(())
    })?;
    Ok(nodes)
}

// =============================================================================
// Statement shapes
// =============================================================================

#[test]
fn test_bare_identifier_node() {
    let nodes = parse_all("foo").unwrap();
    assert_eq!(nodes.len(), 1);
    let node = &nodes[0];
    assert_eq!(node.qualified_name, "foo");
    assert!(node.values.is_empty());
    assert!(node.attributes.is_empty());
    assert!(node.children.is_empty());
}

#[test]
fn test_positional_values() {
    let nodes = parse_all("foo 1 2").unwrap();
    assert_eq!(nodes[0].values, vec![Value::I32(1), Value::I32(2)]);
}

#[test]
fn test_values_then_attributes() {
    let nodes = parse_all("nc 1 a=2").unwrap();
    let node = &nodes[0];
    assert_eq!(node.qualified_name, "nc");
    assert_eq!(node.values, vec![Value::I32(1)]);
    assert_eq!(node.attributes.len(), 1);
    assert_eq!(node.attributes[0].qualified_name, "a");
    assert_eq!(node.attributes[0].value, Value::I32(2));
}

#[test]
fn test_nested_namespaced_blocks() {
    let nodes = parse_all("ne {\n\tfoo:nf {\n\t\tng\n\t}\n}").unwrap();
    assert_eq!(nodes.len(), 1);
    let ne = &nodes[0];
    assert_eq!(ne.qualified_name, "ne");
    assert_eq!(ne.children.len(), 1);
    let nf = &ne.children[0];
    assert_eq!(nf.qualified_name, "foo:nf");
    assert_eq!(nf.namespace(), Some("foo"));
    assert_eq!(nf.children.len(), 1);
    assert_eq!(nf.children[0].qualified_name, "ng");
}

#[test]
fn test_backslash_continuation_spans_lines() {
    let nodes = parse_all("foo \\\n  null\nbar").unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].qualified_name, "foo");
    assert_eq!(nodes[0].values, vec![Value::Null]);
    assert_eq!(nodes[1].qualified_name, "bar");
}

#[test]
fn test_anonymous_node_uses_content_name() {
    let nodes = parse_all("\"value only\"").unwrap();
    assert_eq!(nodes[0].qualified_name, ANONYMOUS_NAME);
    assert_eq!(nodes[0].values, vec![Value::Text("value only".into())]);
}

// =============================================================================
// Value decoding through the parser
// =============================================================================

#[test]
fn test_fixed_offset_timezone() {
    let nodes = parse_all("n 2015/12/06 12:00:00-GMT-02:30").unwrap();
    let dt = nodes[0].values[0].as_date_time().unwrap();
    assert_eq!(dt.timezone, Timezone::Offset(-150));
    assert_eq!(dt.fractional_hnsecs, 0);
}

#[test]
fn test_scalar_spread() {
    let input = "all null \"s\" `w` [aGk=] 3 3L 1.5 1.5f true 12:14:34 2015/12/06 2015/12/07 12:00\n";
    let nodes = parse_all(input).unwrap();
    let values = &nodes[0].values;
    assert_eq!(values.len(), 12);
    assert_eq!(values[0], Value::Null);
    assert_eq!(values[1], Value::Text("s".into()));
    assert_eq!(values[2], Value::Text("w".into()));
    assert_eq!(values[3], Value::Binary(b"hi".to_vec()));
    assert_eq!(values[4], Value::I32(3));
    assert_eq!(values[5], Value::I64(3));
    assert_eq!(values[6], Value::F64(1.5));
    assert_eq!(values[7], Value::F32(1.5));
    assert_eq!(values[8], Value::Bool(true));
    assert!(matches!(values[9], Value::Duration(_)));
    assert!(matches!(values[10], Value::Date(_)));
    assert!(matches!(values[11], Value::DateTime(_)));
}

#[test]
fn test_out_of_range_month_is_value_error() {
    let err = parse_all("n 2015/13/06").unwrap_err();
    assert_eq!(err.kind, SdlErrorKind::Value);
    assert!(format!("{}", err).starts_with("test.sdl:1: "));
}

// =============================================================================
// Error messages
// =============================================================================

#[test]
fn test_assign_where_node_ends() {
    let err = parse_all("foo=bar").unwrap_err();
    assert_eq!(
        format!("{}", err),
        "test.sdl:1: Unexpected '=', expected end of node"
    );
}

#[test]
fn test_namespace_without_name() {
    let err = parse_all("foo:").unwrap_err();
    assert_eq!(
        format!("{}", err),
        "test.sdl:1: Unexpected end of file, expected identifier"
    );
}

#[test]
fn test_lone_namespace_marker() {
    let err = parse_all(":").unwrap_err();
    assert_eq!(
        format!("{}", err),
        "test.sdl:1: Unexpected ':', expected values for anonymous node"
    );
}

#[test]
fn test_stray_backslash() {
    let err = parse_all("foo \"bar\" \\ \"bar\"").unwrap_err();
    assert_eq!(err.kind, SdlErrorKind::Continuation);
    assert_eq!(format!("{}", err), "test.sdl:1: Expected EOL after backslash");
}

#[test]
fn test_error_line_is_one_based() {
    let err = parse_all("ok\nok2\nbroken=\n").unwrap_err();
    assert_eq!(
        format!("{}", err),
        "test.sdl:3: Unexpected '=', expected end of node"
    );
}

// =============================================================================
// Streaming contract
// =============================================================================

#[test]
fn test_whitespace_only_documents_emit_nothing() {
    for input in ["", " \t ", "\n\n\n", "; ; ;\n", "# c\n// c\n/* c */\n"] {
        let nodes = parse_all(input).unwrap();
        assert!(nodes.is_empty(), "input: {input:?}");
    }
}

#[test]
fn test_nodes_arrive_in_source_order_with_children() {
    let input = "a {\n\tchild1\n\tchild2\n}\nb\n";
    let mut seen = Vec::new();
    parse(input, "test.sdl", |node| {
        seen.push((node.qualified_name.clone(), node.children.len()));
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, [("a".to_string(), 2), ("b".to_string(), 0)]);
}

#[test]
fn test_callback_error_aborts() {
    let mut count = 0usize;
    let result = parse("a\nb\nc\n", "test.sdl", |_| {
        count += 1;
        if count == 2 {
            Err(sdlite_core::SdlError::value(
                "enough",
                sdlite_core::Location::default(),
            ))
        } else {
            Ok(())
        }
    });
    assert!(result.is_err());
    assert_eq!(count, 2);
}
