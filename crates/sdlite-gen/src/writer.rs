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

//! The node-tree writer.

use crate::scalar::{
    escape_sdl_string, write_binary, write_date, write_date_time, write_duration, write_float,
};
use sdlite_core::{Node, SdlError, SdlResult, Value, ANONYMOUS_NAME};
use std::io::{self, Write};
use tracing::debug;

/// Writes one scalar value in SDLang wire form.
pub fn write_value<W: Write>(sink: &mut W, value: &Value) -> io::Result<()> {
    match value {
        // Decimal has no payload yet and round-trips through null.
        Value::Null | Value::Decimal => sink.write_all(b"null"),
        Value::Text(text) => {
            sink.write_all(b"\"")?;
            escape_sdl_string(sink, text)?;
            sink.write_all(b"\"")
        }
        Value::Binary(data) => write_binary(sink, data),
        Value::I32(n) => write!(sink, "{}", n),
        Value::I64(n) => write!(sink, "{}L", n),
        Value::F32(v) => {
            write_float(sink, *v)?;
            sink.write_all(b"f")
        }
        Value::F64(v) => write_float(sink, *v),
        Value::Bool(b) => sink.write_all(if *b { b"true" } else { b"false" }),
        Value::Date(date) => write_date(sink, date),
        Value::Duration(hnsecs) => write_duration(sink, *hnsecs),
        Value::DateTime(dt) => write_date_time(sink, dt),
    }
}

fn write_node<W: Write>(sink: &mut W, node: &Node, level: usize) -> io::Result<()> {
    for _ in 0..level {
        sink.write_all(b"\t")?;
    }
    // Anonymous nodes restore value-first syntax by dropping the name.
    let name = if node.qualified_name == ANONYMOUS_NAME {
        ""
    } else {
        node.qualified_name.as_str()
    };
    sink.write_all(name.as_bytes())?;
    for value in &node.values {
        sink.write_all(b" ")?;
        write_value(sink, value)?;
    }
    for attribute in &node.attributes {
        sink.write_all(b" ")?;
        sink.write_all(attribute.qualified_name.as_bytes())?;
        sink.write_all(b"=")?;
        write_value(sink, &attribute.value)?;
    }
    if node.children.is_empty() {
        sink.write_all(b"\n")
    } else {
        sink.write_all(b" {\n")?;
        for child in &node.children {
            write_node(sink, child, level + 1)?;
        }
        for _ in 0..level {
            sink.write_all(b"\t")?;
        }
        sink.write_all(b"}\n")
    }
}

/// Renders a sequence of nodes as SDLang text, one tab of indentation per
/// nesting level starting at `level`.
///
/// Sink failures surface as [`SdlErrorKind::Io`](sdlite_core::SdlErrorKind::Io)
/// errors.
///
/// # Examples
///
/// ```
/// use sdlite_core::{Node, Value};
/// use sdlite_gen::generate;
///
/// let mut node = Node::new("greeting");
/// node.add_value(Value::Text("hi".into()));
/// let mut out = Vec::new();
/// generate(&mut out, &[node], 0).unwrap();
/// assert_eq!(out, b"greeting \"hi\"\n");
/// ```
pub fn generate<W: Write>(sink: &mut W, nodes: &[Node], level: usize) -> SdlResult<()> {
    debug!(nodes = nodes.len(), level, "generating SDLang document");
    for node in nodes {
        write_node(sink, node, level)
            .map_err(|e| SdlError::io(format!("write error: {e}")).with_file("<output>"))?;
    }
    Ok(())
}

/// Renders a sequence of nodes to an owned `String`.
pub fn generate_to_string(nodes: &[Node]) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = generate(&mut out, nodes, 0);
    String::from_utf8_lossy(&out).into_owned()
}
